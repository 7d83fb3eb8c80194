use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use brickdesk_core::conversations::{
    Conversation, ConversationStats, ConversationStatus, ConversationUpsert,
};
use brickdesk_core::leads::{Lead, NewLead};
use brickdesk_core::profiles::Capability;

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationsResponse {
    data: Vec<Conversation>,
    stats: ConversationStats,
}

async fn get_conversations(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<ConversationsResponse>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let data = state.conversation_service.get_conversations()?;
    let stats = state.conversation_service.get_conversation_stats()?;
    Ok(Json(ConversationsResponse { data, stats }))
}

async fn upsert_conversation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(upsert): Json<ConversationUpsert>,
) -> ApiResult<Json<Conversation>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let conversation = state.conversation_service.upsert_conversation(upsert).await?;
    Ok(Json(conversation))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusRequest {
    status: ConversationStatus,
}

async fn set_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<StatusRequest>,
) -> ApiResult<Json<Conversation>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let conversation = state
        .conversation_service
        .set_status(id, payload.status)
        .await?;
    Ok(Json(conversation))
}

/// Turns a live conversation into a pipeline lead and closes it.
async fn promote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(new_lead): Json<NewLead>,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let lead = state.conversation_service.promote_to_lead(id, new_lead).await?;
    Ok(Json(lead))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/conversations",
            get(get_conversations).post(upsert_conversation),
        )
        .route("/conversations/{id}/status", put(set_status))
        .route("/conversations/{id}/promote", post(promote))
}
