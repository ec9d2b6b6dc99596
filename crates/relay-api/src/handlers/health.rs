//! Status and health check handlers.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::{HealthResponse, StatusResponse};

/// GET / - Liveness message.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Server is running".to_string(),
    })
}

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
    })
}
