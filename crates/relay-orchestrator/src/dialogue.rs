//! Coder / product manager dialogue.

use std::sync::Arc;

use relay_adapters::{ChatCompletion, ChatMessage, CompletionRequest};
use tracing::debug;

use crate::error::{OrchestratorError, Result, Stage};
use crate::types::{ConversationTurn, Speaker};

/// Number of coder/manager rounds in every dialogue.
pub const DIALOGUE_ROUNDS: usize = 3;

/// Runs a fixed number of write-review rounds between two agents.
///
/// Each round the coder answers the current prompt and the manager reviews
/// that answer; the next prompt asks the coder to revise using the review.
/// There is no early exit.
pub struct AgentDialogue {
    client: Arc<dyn ChatCompletion>,
    model: String,
}

impl AgentDialogue {
    /// Create a dialogue running on `model`.
    pub fn new(client: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Run the dialogue. Returns `2 * DIALOGUE_ROUNDS` turns, or the first failure.
    pub async fn run(&self, initial_prompt: &str) -> Result<Vec<ConversationTurn>> {
        let mut turns = Vec::with_capacity(DIALOGUE_ROUNDS * 2);
        let mut prompt = initial_prompt.to_string();

        for round in 0..DIALOGUE_ROUNDS {
            debug!(round = round + 1, "Dialogue round");

            let coder_text = self.speak(Speaker::Coder, &prompt).await?;
            turns.push(ConversationTurn::new(Speaker::Coder, coder_text.clone()));

            let review = format!(
                "You are 'Product_Manager'. Review the answer from 'Coder' and give feedback.\n\nAnswer:\n```\n{}\n```",
                coder_text
            );
            let manager_text = self.speak(Speaker::ProductManager, &review).await?;
            turns.push(ConversationTurn::new(
                Speaker::ProductManager,
                manager_text.clone(),
            ));

            if round + 1 < DIALOGUE_ROUNDS {
                prompt = format!(
                    "Your previous answer:\n```\n{}\n```\nFeedback from the Manager:\n\n{}\n\nRevise your answer.",
                    coder_text, manager_text
                );
            }
        }

        Ok(turns)
    }

    async fn speak(&self, speaker: Speaker, prompt: &str) -> Result<String> {
        let stage = match speaker {
            Speaker::Coder => Stage::Coder,
            Speaker::ProductManager => Stage::ProductManager,
        };
        let request = CompletionRequest::new(
            self.model.clone(),
            vec![
                ChatMessage::system(format!("You are '{}'.", speaker.label())),
                ChatMessage::user(prompt),
            ],
        );
        self.client
            .complete(request)
            .await
            .map_err(|e| OrchestratorError::upstream(stage, e))
    }
}
