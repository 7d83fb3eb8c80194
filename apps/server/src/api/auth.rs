use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use brickdesk_core::profiles::Profile;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    profile: Profile,
}

/// Exchanges email and password for a bearer token.
///
/// Unknown emails and bad passwords produce the same 401 so the endpoint
/// does not leak which accounts exist.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let profile = state
        .profile_service
        .get_by_email(&payload.email.trim().to_lowercase())
        .map_err(|_| invalid())?;
    let hash = state
        .profile_service
        .get_password_hash(&profile.id)
        .map_err(|_| invalid())?;

    if !state.auth.verify_password(&payload.password, &hash) {
        return Err(invalid());
    }

    let access_token = state.auth.issue_token(&profile)?;
    Ok(Json(LoginResponse {
        access_token,
        profile,
    }))
}

/// Returns the caller's own profile, resolved fresh from storage.
async fn me(State(state): State<Arc<AppState>>, user: AuthUser) -> ApiResult<Json<Profile>> {
    let profile = state.profile_service.get_profile(&user.profile_id)?;
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}
