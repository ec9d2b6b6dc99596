//! Test doubles shared by the orchestrator tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use relay_adapters::{AdapterError, ChatCompletion, CompletionRequest};

use crate::intent::{Intent, IntentClassifier};

/// Chat client replaying a fixed script and recording every request.
pub(crate) struct ScriptedChat {
    replies: Mutex<VecDeque<relay_adapters::Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedChat {
    pub fn new<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn from_results(replies: Vec<relay_adapters::Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedChat {
    async fn complete(&self, request: CompletionRequest) -> relay_adapters::Result<String> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AdapterError::UpstreamFailure("script exhausted".into())))
    }
}

/// Classifier that always answers the same intent.
pub(crate) struct FixedIntent(pub Intent);

#[async_trait]
impl IntentClassifier for FixedIntent {
    async fn classify(&self, _text: &str) -> Intent {
        self.0
    }
}
