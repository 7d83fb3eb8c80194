use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use brickdesk_core::profiles::{Capability, Profile, ProfileUpdate};

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Team directory. Every signed-in role may read it.
async fn get_profiles(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Profile>>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let profiles = state.profile_service.get_profiles()?;
    Ok(Json(profiles))
}

/// Self-service edit of the caller's own name, phone and avatar.
async fn update_me(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<Profile>> {
    authorize(&state, &user, Capability::EditOwnProfile)?;
    update.validate()?;
    let profile = state
        .profile_service
        .update_profile(user.profile_id, update)
        .await?;
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profiles", get(get_profiles))
        .route("/profiles/me", put(update_me))
}
