//! Request orchestrator: classify, dispatch, normalize.

use std::sync::Arc;

use relay_adapters::{ChatCompletion, ChatMessage, CompletionRequest};
use relay_persistence::PromptStore;
use serde_json::{Map, Value};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::dialogue::AgentDialogue;
use crate::error::{OrchestratorError, Result, Stage};
use crate::improve::SelfImprovement;
use crate::intent::{Intent, IntentClassifier, LlmIntentClassifier};
use crate::types::{ConversationTurn, ImprovementReport, OrchestrationResult};

/// Model used by the classifier and both agent loops.
pub const DEFAULT_AGENT_MODEL: &str = "gpt-4o";

/// Model used for single-turn chat when the caller names none.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1";

/// Characters of the request echoed in the dispatch log line.
const PREVIEW_CHARS: usize = 50;

/// Routes free-text requests to the chat, dialogue or self-improvement branch.
///
/// Every call of [`Orchestrator::handle`] goes Classifying → Dispatching →
/// Branch-Executing → Responding; failures end in Responding as an
/// [`OrchestrationResult::Error`].
pub struct Orchestrator {
    client: Arc<dyn ChatCompletion>,
    classifier: Arc<dyn IntentClassifier>,
    dialogue: AgentDialogue,
    improvement: SelfImprovement,
}

impl Orchestrator {
    /// Create an orchestrator whose classifier and loops run on [`DEFAULT_AGENT_MODEL`].
    pub fn new(client: Arc<dyn ChatCompletion>, store: Arc<dyn PromptStore>) -> Self {
        Self::with_agent_model(client, store, DEFAULT_AGENT_MODEL)
    }

    /// Create an orchestrator whose classifier and loops run on `agent_model`.
    pub fn with_agent_model(
        client: Arc<dyn ChatCompletion>,
        store: Arc<dyn PromptStore>,
        agent_model: &str,
    ) -> Self {
        Self {
            classifier: Arc::new(LlmIntentClassifier::new(Arc::clone(&client), agent_model)),
            dialogue: AgentDialogue::new(Arc::clone(&client), agent_model),
            improvement: SelfImprovement::new(Arc::clone(&client), store, agent_model),
            client,
        }
    }

    /// Replace the intent classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Single-turn chat grounded on caller-supplied page context.
    pub async fn chat(&self, text: &str, model: &str, context: &Map<String, Value>) -> Result<String> {
        let context_str =
            serde_json::to_string_pretty(context).unwrap_or_else(|_| "{}".to_string());
        let system_prompt = format!(
            "You are a smart assistant. Here is the context from the page:\n\n{}\n\nUse it.",
            context_str
        );
        let request = CompletionRequest::new(
            model,
            vec![ChatMessage::system(system_prompt), ChatMessage::user(text)],
        );
        self.client
            .complete(request)
            .await
            .map_err(|e| OrchestratorError::upstream(Stage::Chat, e))
    }

    /// Run the coder / product manager dialogue.
    pub async fn agent_dialogue(&self, prompt: &str) -> Result<Vec<ConversationTurn>> {
        self.dialogue.run(prompt).await
    }

    /// Run one self-improvement cycle.
    pub async fn self_improve(&self, task: &str) -> Result<ImprovementReport> {
        self.improvement.run(task).await
    }

    /// Classify `text` and run the matching branch.
    ///
    /// Never fails: branch errors become [`OrchestrationResult::Error`].
    pub async fn handle(
        &self,
        text: &str,
        model: &str,
        context: &Map<String, Value>,
    ) -> OrchestrationResult {
        let span = tracing::info_span!("orchestrate", request_id = %Uuid::new_v4());
        async move {
            let intent = self.classifier.classify(text).await;
            let preview: String = text.chars().take(PREVIEW_CHARS).collect();
            info!(intent = %intent, preview = %preview, "Dispatching request");

            let outcome = match intent {
                Intent::AgentDialogue => self
                    .agent_dialogue(text)
                    .await
                    .map(OrchestrationResult::Conversation),
                Intent::SelfImprove => self
                    .self_improve(text)
                    .await
                    .map(OrchestrationResult::Report),
                Intent::SimpleChat => self
                    .chat(text, model, context)
                    .await
                    .map(OrchestrationResult::Chat),
            };

            outcome.unwrap_or_else(|e| {
                warn!(intent = %intent, error = %e, "Branch failed");
                OrchestrationResult::Error(e.user_message())
            })
        }
        .instrument(span)
        .await
    }
}
