//! Worker / critic / prompt-engineer self-improvement loop.

use std::sync::Arc;

use relay_adapters::{ChatCompletion, ChatMessage, CompletionRequest};
use relay_persistence::PromptStore;
use tracing::{debug, info};

use crate::error::{OrchestratorError, Result, Stage};
use crate::types::ImprovementReport;

/// Worker prompt used when the store holds none.
pub const DEFAULT_WORKER_PROMPT: &str = "You are an AI assistant.";

/// Number of model stages in one cycle (worker, critic, prompt engineer).
pub const IMPROVEMENT_STAGES: usize = 3;

/// Rewrites the stored worker prompt based on a critique of one task.
///
/// Stages run strictly in order without retries. The store is written only
/// after all model stages succeed, so a failed cycle leaves it untouched.
pub struct SelfImprovement {
    client: Arc<dyn ChatCompletion>,
    store: Arc<dyn PromptStore>,
    model: String,
}

impl SelfImprovement {
    /// Create a loop running on `model` against `store`.
    pub fn new(
        client: Arc<dyn ChatCompletion>,
        store: Arc<dyn PromptStore>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            store,
            model: model.into(),
        }
    }

    /// Run one improvement cycle for `task`.
    pub async fn run(&self, task: &str) -> Result<ImprovementReport> {
        let initial_prompt = self
            .store
            .load()
            .map_err(|source| OrchestratorError::Aborted {
                stage: Stage::LoadPrompt,
                source,
            })?
            .unwrap_or_else(|| DEFAULT_WORKER_PROMPT.to_string());

        let worker_result = self.ask(Stage::Worker, &initial_prompt, task).await?;

        let critic_request = format!(
            "You are 'Critic'. Evaluate the 'Worker' answer to the task: '{}'. Answer:\n\n{}",
            task, worker_result
        );
        let critic_feedback = self
            .ask(Stage::Critic, "You are 'Critic'.", &critic_request)
            .await?;

        let engineer_request = format!(
            "You are 'Prompt Engineer'. Improve the system prompt. Original: '{}'. Task: '{}'. Result: '{}'. Critique: '{}'. Write ONLY the new prompt.",
            initial_prompt, task, worker_result, critic_feedback
        );
        let new_prompt = self
            .ask(
                Stage::PromptEngineer,
                "You are 'Prompt Engineer'.",
                &engineer_request,
            )
            .await?;

        self.store
            .save(&new_prompt)
            .map_err(|source| OrchestratorError::Aborted {
                stage: Stage::PersistPrompt,
                source,
            })?;
        info!(bytes = new_prompt.len(), "Worker prompt replaced");

        Ok(ImprovementReport {
            initial_prompt,
            worker_result,
            critic_feedback,
            new_prompt,
        })
    }

    async fn ask(&self, stage: Stage, system: &str, user: &str) -> Result<String> {
        debug!(stage = %stage, "Self-improvement stage");
        let request = CompletionRequest::new(
            self.model.clone(),
            vec![ChatMessage::system(system), ChatMessage::user(user)],
        );
        self.client
            .complete(request)
            .await
            .map_err(|e| OrchestratorError::upstream(stage, e))
    }
}
