//! Values produced by the call chains.

use serde::{Deserialize, Serialize};

/// Participant of the agent dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// Writes and revises the answer.
    Coder,
    /// Reviews the coder's answer.
    #[serde(rename = "Product_Manager")]
    ProductManager,
}

impl Speaker {
    /// Label used in prompts and on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::Coder => "Coder",
            Self::ProductManager => "Product_Manager",
        }
    }
}

/// One turn of the agent dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who produced the turn.
    pub sender: Speaker,
    /// Generated text.
    pub text: String,
}

impl ConversationTurn {
    /// Create a turn.
    pub fn new(sender: Speaker, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}

/// Outcome of one self-improvement cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementReport {
    /// Prompt the worker ran with.
    pub initial_prompt: String,
    /// Worker answer to the task.
    pub worker_result: String,
    /// Critic evaluation of the answer.
    pub critic_feedback: String,
    /// Replacement prompt, now persisted.
    pub new_prompt: String,
}

/// Response envelope of the orchestrator.
///
/// Serializes as `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum OrchestrationResult {
    /// Single-turn chat reply.
    Chat(String),
    /// Full agent dialogue.
    Conversation(Vec<ConversationTurn>),
    /// Self-improvement report.
    Report(ImprovementReport),
    /// Any branch failure, as a user-facing message.
    Error(String),
}

impl OrchestrationResult {
    /// Whether the result is an error envelope.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
