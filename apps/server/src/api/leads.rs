use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use brickdesk_core::leads::{Lead, LeadQuery, LeadStage, LeadStats, LeadUpdate, NewLead};
use brickdesk_core::profiles::Capability;

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeadsResponse {
    data: Vec<Lead>,
    stats: LeadStats,
}

async fn get_leads(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<LeadsResponse>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let data = state.lead_service.get_leads()?;
    let stats = state.lead_service.get_lead_stats()?;
    Ok(Json(LeadsResponse { data, stats }))
}

/// Filter-and-sort over the whole lead collection. The query is a plain
/// JSON body so the dashboard can POST its current table state verbatim.
async fn search_leads(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(query): Json<LeadQuery>,
) -> ApiResult<Json<Vec<Lead>>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let leads = state.lead_service.search_leads(&query)?;
    Ok(Json(leads))
}

async fn get_lead(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::ViewReports)?;
    let lead = state.lead_service.get_lead(&id)?;
    Ok(Json(lead))
}

async fn create_lead(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(new_lead): Json<NewLead>,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let lead = state.lead_service.create_lead(new_lead).await?;
    Ok(Json(lead))
}

async fn update_lead(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(update): Json<LeadUpdate>,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let lead = state.lead_service.update_lead(update).await?;
    Ok(Json(lead))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StageRequest {
    stage: LeadStage,
}

async fn set_stage(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<StageRequest>,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let lead = state.lead_service.set_stage(id, payload.stage).await?;
    Ok(Json(lead))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignRequest {
    /// Profile id of the assignee, or null to unassign.
    assigned_to: Option<String>,
}

async fn assign_lead(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<AssignRequest>,
) -> ApiResult<Json<Lead>> {
    authorize(&state, &user, Capability::EditLeads)?;
    let lead = state
        .lead_service
        .assign_lead(id, payload.assigned_to)
        .await?;
    Ok(Json(lead))
}

/// CSV download of the rows matching the posted query.
async fn export_leads(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(query): Json<LeadQuery>,
) -> ApiResult<impl IntoResponse> {
    authorize(&state, &user, Capability::ViewReports)?;
    let csv = state.lead_service.export_leads_csv(&query)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"leads.csv\"",
            ),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leads", get(get_leads).post(create_lead).put(update_lead))
        .route("/leads/search", post(search_leads))
        .route("/leads/export", post(export_leads))
        .route("/leads/{id}", get(get_lead))
        .route("/leads/{id}/stage", put(set_stage))
        .route("/leads/{id}/assign", put(assign_lead))
}
