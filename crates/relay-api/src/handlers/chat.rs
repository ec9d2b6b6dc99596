//! Single-turn chat handler.

use axum::{extract::State, Json};
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;
use crate::types::{ChatRequest, ChatResponse};

/// POST /api/chat - Answer one message using the supplied page context.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    debug!(model = %req.model, context_keys = req.context.len(), "Chat request");
    let response = state
        .orchestrator
        .chat(&req.text, &req.model, &req.context)
        .await?;
    Ok(Json(ChatResponse { response }))
}
