//! Stub adapters and state builders for handler and router tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use relay_adapters::{
    AdapterError, AudioStream, ChatCompletion, CompletionRequest, SpeechToText, TextToSpeech,
};
use relay_orchestrator::{Intent, IntentClassifier, Orchestrator};
use relay_persistence::MemoryPromptStore;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Chat stub replaying canned replies in order.
pub(crate) struct StubChat {
    replies: Mutex<VecDeque<relay_adapters::Result<String>>>,
    calls: Mutex<usize>,
}

impl StubChat {
    pub fn new<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn from_results(replies: Vec<relay_adapters::Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ChatCompletion for StubChat {
    async fn complete(&self, _request: CompletionRequest) -> relay_adapters::Result<String> {
        *self.calls.lock().unwrap() += 1;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AdapterError::UpstreamFailure("no reply scripted".into())))
    }
}

/// Classifier stub with a fixed answer.
pub(crate) struct StubClassifier(pub Intent);

#[async_trait]
impl IntentClassifier for StubClassifier {
    async fn classify(&self, _text: &str) -> Intent {
        self.0
    }
}

/// Speech stub: synthesizes fixed audio chunks and transcribes to fixed text.
pub(crate) struct StubSpeech {
    pub audio: Option<Vec<&'static [u8]>>,
    pub transcript: Option<String>,
}

impl StubSpeech {
    pub fn working() -> Self {
        Self {
            audio: Some(vec![b"ID3".as_slice(), b"-audio".as_slice()]),
            transcript: Some("hello from audio".to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            audio: None,
            transcript: None,
        }
    }
}

#[async_trait]
impl TextToSpeech for StubSpeech {
    async fn synthesize(&self, _text: &str) -> relay_adapters::Result<AudioStream> {
        match &self.audio {
            Some(chunks) => {
                let chunks: Vec<relay_adapters::Result<Bytes>> = chunks
                    .iter()
                    .map(|c| Ok(Bytes::from_static(*c)))
                    .collect();
                Ok(stream::iter(chunks).boxed())
            }
            None => Err(AdapterError::UpstreamFailure("voice unavailable".into())),
        }
    }
}

#[async_trait]
impl SpeechToText for StubSpeech {
    async fn transcribe(&self, _audio: Vec<u8>, _file_name: &str) -> relay_adapters::Result<String> {
        self.transcript
            .clone()
            .ok_or_else(|| AdapterError::UpstreamFailure("unsupported format".into()))
    }
}

/// State whose chat replies come from `replies` and whose speech adapters work.
pub(crate) fn make_test_state<'a>(replies: impl IntoIterator<Item = &'a str>) -> AppState {
    state_with(
        Arc::new(StubChat::new(replies)),
        None,
        Arc::new(StubSpeech::working()),
    )
}

/// State from explicit parts; `intent` pins the classifier when set.
pub(crate) fn state_with(
    chat: Arc<StubChat>,
    intent: Option<Intent>,
    speech: Arc<StubSpeech>,
) -> AppState {
    let mut orchestrator = Orchestrator::new(chat, Arc::new(MemoryPromptStore::new()));
    if let Some(intent) = intent {
        orchestrator = orchestrator.with_classifier(Arc::new(StubClassifier(intent)));
    }
    AppState::new(ApiConfig::default(), orchestrator, speech.clone(), speech)
}
