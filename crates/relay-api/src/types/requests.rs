//! Request DTOs for the API.

use relay_orchestrator::DEFAULT_CHAT_MODEL;
use serde::Deserialize;
use serde_json::{Map, Value};

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

/// Single-turn chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// User message.
    pub text: String,
    /// Model identifier.
    #[serde(default = "default_chat_model")]
    pub model: String,
    /// Page context embedded in the system prompt.
    #[serde(default)]
    pub context: Map<String, Value>,
}

/// Agent dialogue request.
#[derive(Debug, Clone, Deserialize)]
pub struct AutogenRequest {
    /// Initial prompt for the coder.
    pub prompt: String,
}

/// Self-improvement request.
#[derive(Debug, Clone, Deserialize)]
pub struct SelfImproveRequest {
    /// Task the worker is evaluated on.
    pub task: String,
}

/// Orchestrated request; the intent decides which flow runs.
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestrateRequest {
    /// Free-text request.
    pub text: String,
    /// Model identifier for the chat branch.
    #[serde(default = "default_chat_model")]
    pub model: String,
    /// Page context for the chat branch.
    #[serde(default)]
    pub context: Map<String, Value>,
}

/// Text-to-speech request.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize.
    pub text: String,
}
