//! HTTP surface: versioned CRM routes plus the serverless-style proxy
//! endpoints the messaging automations call.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod admin_users;
pub mod auth;
pub mod catalog;
pub mod conversations;
pub mod health;
pub mod leads;
pub mod profiles;
pub mod proxy;
pub mod reports;
pub mod settings;

pub fn app_router(state: Arc<AppState>) -> Router {
    let v1 = Router::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(leads::router())
        .merge(conversations::router())
        .merge(catalog::router())
        .merge(profiles::router())
        .merge(reports::router())
        .merge(settings::router());

    // Browser clients and webhook callers hit these cross-origin; the
    // permissive CORS layer answers their preflights.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", v1)
        .nest("/api", admin_users::router().merge(proxy::router()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
