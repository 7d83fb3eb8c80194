use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use brickdesk_core::catalog::{Development, DevelopmentUpdate, NewDevelopment};
use brickdesk_core::profiles::Capability;

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_developments(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Development>>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let developments = state.catalog_service.get_developments()?;
    Ok(Json(developments))
}

async fn get_development(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Development>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let development = state.catalog_service.get_development(&id)?;
    Ok(Json(development))
}

async fn create_development(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(new_development): Json<NewDevelopment>,
) -> ApiResult<Json<Development>> {
    authorize(&state, &user, Capability::EditCatalog)?;
    let development = state
        .catalog_service
        .create_development(new_development)
        .await?;
    Ok(Json(development))
}

async fn update_development(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(update): Json<DevelopmentUpdate>,
) -> ApiResult<Json<Development>> {
    authorize(&state, &user, Capability::EditCatalog)?;
    let development = state.catalog_service.update_development(update).await?;
    Ok(Json(development))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/catalog",
            get(get_developments)
                .post(create_development)
                .put(update_development),
        )
        .route("/catalog/{id}", get(get_development))
}
