use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use brickdesk_core::profiles::Capability;
use brickdesk_core::settings::{Settings, SettingsUpdate};

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_settings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Settings>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

/// Instance-wide preferences; admin only.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(update): Json<SettingsUpdate>,
) -> ApiResult<StatusCode> {
    authorize(&state, &user, Capability::ManageTeam)?;
    state.settings_service.update_settings(&update).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
