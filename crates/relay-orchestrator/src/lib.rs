//! Intent routing and agent loops for the relay.
//!
//! This crate provides the [`Orchestrator`], which classifies a free-text
//! request and runs one of three fixed call chains against a
//! [`ChatCompletion`](relay_adapters::ChatCompletion) adapter:
//!
//! - `simple_chat`: one chat call grounded on page context
//! - `agent_dialogue`: [`DIALOGUE_ROUNDS`] coder / product manager rounds
//! - `self_improve`: worker, critic and prompt-engineer stages that rewrite
//!   the stored worker prompt
//!
//! Results are normalized into an [`OrchestrationResult`] envelope.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use relay_adapters::{OpenAiClient, ProviderConfig};
//! use relay_orchestrator::Orchestrator;
//! use relay_persistence::FilePromptStore;
//!
//! # async fn example() {
//! let client = Arc::new(OpenAiClient::new(&ProviderConfig::from_env()));
//! let orchestrator = Orchestrator::new(client, Arc::new(FilePromptStore::default()));
//!
//! let result = orchestrator.handle("Write a CSV parser", "gpt-4.1", &Default::default()).await;
//! println!("{}", serde_json::to_string(&result).unwrap());
//! # }
//! ```

mod dialogue;
mod error;
mod improve;
mod intent;
mod orchestrator;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use dialogue::{AgentDialogue, DIALOGUE_ROUNDS};
pub use error::{ErrorKind, OrchestratorError, Result, Stage, SELF_IMPROVE_FAILURE};
pub use improve::{SelfImprovement, DEFAULT_WORKER_PROMPT, IMPROVEMENT_STAGES};
pub use intent::{Intent, IntentClassifier, LlmIntentClassifier};
pub use orchestrator::{Orchestrator, DEFAULT_AGENT_MODEL, DEFAULT_CHAT_MODEL};
pub use types::{ConversationTurn, ImprovementReport, OrchestrationResult, Speaker};
