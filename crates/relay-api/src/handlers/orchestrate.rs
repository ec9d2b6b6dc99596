//! Orchestrated request handler.

use axum::{extract::State, Json};
use relay_orchestrator::OrchestrationResult;

use crate::state::AppState;
use crate::types::OrchestrateRequest;

/// POST /api/orchestrate - Classify the request and run the matching flow.
///
/// Always answers `{"type": ..., "data": ...}`, including on failure.
pub async fn orchestrate(
    State(state): State<AppState>,
    Json(req): Json<OrchestrateRequest>,
) -> Json<OrchestrationResult> {
    Json(
        state
            .orchestrator
            .handle(&req.text, &req.model, &req.context)
            .await,
    )
}
