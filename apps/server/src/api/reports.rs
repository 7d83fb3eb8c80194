use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use brickdesk_core::conversations::ConversationStats;
use brickdesk_core::leads::{AgentType, Channel, LeadStage, ORDERED_STAGES};
use brickdesk_core::profiles::Capability;

use crate::auth::{authorize, AuthUser};
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StageCount {
    stage: LeadStage,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChannelBreakdown {
    whatsapp: usize,
    instagram: usize,
    facebook: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgentTypeBreakdown {
    emprendimientos: usize,
    inmuebles: usize,
    tasaciones: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PipelineReport {
    total_leads: usize,
    average_score: f64,
    /// Stage counts in funnel order.
    funnel: Vec<StageCount>,
    by_channel: ChannelBreakdown,
    by_agent_type: AgentTypeBreakdown,
    conversations: ConversationStats,
}

/// Funnel and breakdown numbers for the reports view, computed over the
/// full lead collection on each request.
async fn pipeline_report(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<PipelineReport>> {
    authorize(&state, &user, Capability::ViewReports)?;

    let leads = state.lead_service.get_leads()?;
    let stats = state.lead_service.get_lead_stats()?;

    let funnel = ORDERED_STAGES
        .iter()
        .map(|&stage| StageCount {
            stage,
            count: leads.iter().filter(|l| l.stage == stage).count(),
        })
        .collect();

    let mut by_channel = ChannelBreakdown {
        whatsapp: 0,
        instagram: 0,
        facebook: 0,
    };
    let mut by_agent_type = AgentTypeBreakdown {
        emprendimientos: 0,
        inmuebles: 0,
        tasaciones: 0,
    };
    for lead in &leads {
        match lead.channel {
            Channel::Whatsapp => by_channel.whatsapp += 1,
            Channel::Instagram => by_channel.instagram += 1,
            Channel::Facebook => by_channel.facebook += 1,
        }
        match lead.agent_type {
            AgentType::Emprendimientos => by_agent_type.emprendimientos += 1,
            AgentType::Inmuebles => by_agent_type.inmuebles += 1,
            AgentType::Tasaciones => by_agent_type.tasaciones += 1,
        }
    }

    let conversations = state.conversation_service.get_conversation_stats()?;

    Ok(Json(PipelineReport {
        total_leads: stats.total,
        average_score: stats.average_score,
        funnel,
        by_channel,
        by_agent_type,
        conversations,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports/pipeline", get(pipeline_report))
}
