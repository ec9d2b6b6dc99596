//! Agent dialogue and self-improvement handlers.

use axum::{extract::State, Json};
use relay_orchestrator::ImprovementReport;

use crate::error::Result;
use crate::state::AppState;
use crate::types::{AutogenRequest, ConversationResponse, SelfImproveRequest};

/// POST /api/autogen_chat - Run the coder / product manager dialogue.
pub async fn autogen_chat(
    State(state): State<AppState>,
    Json(req): Json<AutogenRequest>,
) -> Result<Json<ConversationResponse>> {
    let conversation = state.orchestrator.agent_dialogue(&req.prompt).await?;
    Ok(Json(ConversationResponse { conversation }))
}

/// POST /api/self_improve - Run one self-improvement cycle.
pub async fn self_improve(
    State(state): State<AppState>,
    Json(req): Json<SelfImproveRequest>,
) -> Result<Json<ImprovementReport>> {
    let report = state.orchestrator.self_improve(&req.task).await?;
    Ok(Json(report))
}
