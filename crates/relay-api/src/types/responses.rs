//! Response DTOs for the API.

use relay_orchestrator::ConversationTurn;
use serde::Serialize;

/// Root status response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Human-readable status.
    pub status: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Single-turn chat reply.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// Model reply.
    pub response: String,
}

/// Agent dialogue transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    /// Turns in order.
    pub conversation: Vec<ConversationTurn>,
}

/// Transcription result.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    /// Transcribed text.
    pub text: String,
}

/// Error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// User-facing message.
    pub error: String,
}
