//! Team management endpoints, mounted at `/api/admin-users`.
//!
//! These mirror the privileged serverless functions the dashboard calls:
//! create, update and delete take the caller's bearer token, re-resolve the
//! caller's profile and refuse anyone who is not an admin.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use brickdesk_core::profiles::{AdminProfileUpdate, Capability, NewProfile, Profile};

use crate::auth::{authorize, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Invite a new team member. The account is created confirmed so the
/// invitee can sign in immediately with the chosen password.
async fn create_user(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(new_profile): Json<NewProfile>,
) -> ApiResult<Json<Profile>> {
    authorize(&state, &user, Capability::ManageTeam)?;
    new_profile.validate()?;
    let password_hash = state.auth.hash_password(&new_profile.password)?;
    let profile = state
        .profile_service
        .create_profile(new_profile, password_hash)
        .await?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserRequest {
    user_id: String,
    #[serde(flatten)]
    update: AdminProfileUpdate,
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<Profile>> {
    authorize(&state, &user, Capability::ManageTeam)?;
    payload.update.validate()?;
    let password_hash = match payload.update.password.as_deref() {
        Some(password) => Some(state.auth.hash_password(password)?),
        None => None,
    };
    let profile = state
        .profile_service
        .admin_update_profile(payload.user_id, payload.update, password_hash)
        .await?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteUserRequest {
    user_id: String,
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<DeleteUserRequest>,
) -> ApiResult<Json<Value>> {
    let caller = authorize(&state, &user, Capability::ManageTeam)?;
    // An admin deleting their own account would lock the team out.
    if caller.id == payload.user_id {
        return Err(ApiError::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }
    state.profile_service.delete_profile(payload.user_id).await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/admin-users",
        post(create_user).put(update_user).delete(delete_user),
    )
}
