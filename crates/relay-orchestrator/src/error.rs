//! Error types for the orchestrator.

use std::fmt;

use relay_adapters::AdapterError;
use relay_persistence::PersistenceError;
use thiserror::Error;

/// Message shown for any self-improvement failure other than a missing credential.
pub const SELF_IMPROVE_FAILURE: &str = "Failed to complete the self-improvement cycle.";

/// A step of one of the call chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Intent classification.
    Classify,
    /// Single-turn chat.
    Chat,
    /// Coder turn of the agent dialogue.
    Coder,
    /// Product manager turn of the agent dialogue.
    ProductManager,
    /// Reading the worker prompt.
    LoadPrompt,
    /// Worker stage of self-improvement.
    Worker,
    /// Critic stage of self-improvement.
    Critic,
    /// Prompt-engineer stage of self-improvement.
    PromptEngineer,
    /// Writing the new worker prompt.
    PersistPrompt,
}

impl Stage {
    /// Whether the stage belongs to the self-improvement loop.
    pub fn is_self_improvement(self) -> bool {
        matches!(
            self,
            Self::LoadPrompt | Self::Worker | Self::Critic | Self::PromptEngineer | Self::PersistPrompt
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classify => "classify",
            Self::Chat => "chat",
            Self::Coder => "coder",
            Self::ProductManager => "product_manager",
            Self::LoadPrompt => "load_prompt",
            Self::Worker => "worker",
            Self::Critic => "critic",
            Self::PromptEngineer => "prompt_engineer",
            Self::PersistPrompt => "persist_prompt",
        };
        f.write_str(name)
    }
}

/// Closed classification of orchestration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A provider credential is not configured.
    CredentialMissing,
    /// A provider call failed.
    UpstreamFailure,
    /// A loop stopped on a local failure (prompt store).
    Aborted,
}

/// Orchestrator-specific errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A provider credential is not configured; no network call was made.
    #[error("{provider} API key is not configured")]
    CredentialMissing {
        /// Provider whose key is missing.
        provider: &'static str,
    },

    /// A provider call failed.
    #[error("{stage} call failed: {message}")]
    UpstreamFailure {
        /// Stage that issued the call.
        stage: Stage,
        /// Provider detail.
        message: String,
    },

    /// The prompt store failed.
    #[error("{stage} aborted: {source}")]
    Aborted {
        /// Stage that touched the store.
        stage: Stage,
        /// Underlying store error.
        #[source]
        source: PersistenceError,
    },
}

impl OrchestratorError {
    /// Wrap an adapter failure raised during `stage`.
    pub fn upstream(stage: Stage, err: AdapterError) -> Self {
        match err {
            AdapterError::CredentialMissing { provider } => Self::CredentialMissing { provider },
            AdapterError::UpstreamFailure(message) => Self::UpstreamFailure { stage, message },
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CredentialMissing { .. } => ErrorKind::CredentialMissing,
            Self::UpstreamFailure { .. } => ErrorKind::UpstreamFailure,
            Self::Aborted { .. } => ErrorKind::Aborted,
        }
    }

    /// Text shown to API callers.
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialMissing { provider } => {
                format!("{} API key is not configured.", provider)
            }
            Self::UpstreamFailure { stage, .. } if stage.is_self_improvement() => {
                SELF_IMPROVE_FAILURE.to_string()
            }
            Self::UpstreamFailure { message, .. } => format!("OpenAI error: {}", message),
            Self::Aborted { .. } => SELF_IMPROVE_FAILURE.to_string(),
        }
    }
}

/// Result type for orchestrator operations.
pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_upstream_maps_credential_missing() {
        let err = OrchestratorError::upstream(
            Stage::Chat,
            AdapterError::CredentialMissing { provider: "OpenAI" },
        );
        assert_eq!(err.kind(), ErrorKind::CredentialMissing);
        assert_eq!(err.user_message(), "OpenAI API key is not configured.");
    }

    #[test]
    fn test_chat_failure_message_carries_detail() {
        let err = OrchestratorError::upstream(
            Stage::Coder,
            AdapterError::UpstreamFailure("OpenAI API error 429: rate limited".into()),
        );
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
        assert_eq!(
            err.user_message(),
            "OpenAI error: OpenAI API error 429: rate limited"
        );
    }

    #[test]
    fn test_self_improvement_failures_are_generic() {
        let err = OrchestratorError::upstream(
            Stage::Critic,
            AdapterError::UpstreamFailure("timeout".into()),
        );
        assert_eq!(err.user_message(), SELF_IMPROVE_FAILURE);

        let err = OrchestratorError::Aborted {
            stage: Stage::PersistPrompt,
            source: PersistenceError::WriteError {
                path: PathBuf::from("worker_prompt.txt"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        };
        assert_eq!(err.kind(), ErrorKind::Aborted);
        assert_eq!(err.user_message(), SELF_IMPROVE_FAILURE);
        assert!(err.to_string().starts_with("persist_prompt aborted"));
    }
}
