//! Intent classification.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use relay_adapters::{ChatCompletion, ChatMessage, CompletionRequest};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Router instructions; `{text}` is replaced with the request.
const ROUTER_PROMPT: &str = "You are a request router. Your job is to classify the user's request into one of three categories based on their intent. Respond ONLY with the category name. The categories are:
1. 'simple_chat': For simple questions, greetings, or requests for information that can be answered directly.
2. 'agent_dialogue': For requests that imply a creative or development process followed by a review.
3. 'self_improve': For meta-requests to improve the AI's own underlying instructions or prompts.
User Request: \"{text}\"";

/// Category of a request, selecting the branch that serves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Answer directly with one chat call.
    #[default]
    SimpleChat,
    /// Run the coder / product manager dialogue.
    AgentDialogue,
    /// Run the self-improvement loop.
    SelfImprove,
}

impl Intent {
    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SimpleChat => "simple_chat",
            Self::AgentDialogue => "agent_dialogue",
            Self::SelfImprove => "self_improve",
        }
    }

    /// Interpret raw model output.
    ///
    /// Trims, lowercases and strips quotes; anything that is then not
    /// exactly a known label is [`Intent::SimpleChat`].
    pub fn from_label(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['\'', '"'], "");
        match normalized.as_str() {
            "agent_dialogue" => Self::AgentDialogue,
            "self_improve" => Self::SelfImprove,
            _ => Self::SimpleChat,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels free text with an [`Intent`]. Never fails.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify a request.
    async fn classify(&self, text: &str) -> Intent;
}

/// Classifier backed by a single deterministic chat call.
pub struct LlmIntentClassifier {
    client: Arc<dyn ChatCompletion>,
    model: String,
}

impl LlmIntentClassifier {
    /// Create a classifier using `model` on `client`.
    pub fn new(client: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl IntentClassifier for LlmIntentClassifier {
    async fn classify(&self, text: &str) -> Intent {
        let request = CompletionRequest::new(
            self.model.clone(),
            vec![ChatMessage::system(ROUTER_PROMPT.replace("{text}", text))],
        )
        .with_temperature(0.0);

        match self.client.complete(request).await {
            Ok(raw) => {
                let intent = Intent::from_label(&raw);
                debug!(raw = %raw.trim(), intent = %intent, "Classified request");
                intent
            }
            Err(e) => {
                warn!(error = %e, "Intent classification failed, using simple_chat");
                Intent::SimpleChat
            }
        }
    }
}
