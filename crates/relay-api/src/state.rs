//! Application state shared across handlers.

use std::sync::Arc;

use relay_adapters::{
    ElevenLabsClient, OpenAiClient, ProviderConfig, SpeechToText, TextToSpeech, WhisperClient,
};
use relay_orchestrator::{Orchestrator, DEFAULT_AGENT_MODEL};
use relay_persistence::PromptStore;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Chat, dialogue and self-improvement flows.
    pub orchestrator: Arc<Orchestrator>,
    /// Speech synthesis adapter.
    pub tts: Arc<dyn TextToSpeech>,
    /// Transcription adapter.
    pub stt: Arc<dyn SpeechToText>,
}

impl AppState {
    /// Creates a new AppState from already-built components.
    pub fn new(
        config: ApiConfig,
        orchestrator: Orchestrator,
        tts: Arc<dyn TextToSpeech>,
        stt: Arc<dyn SpeechToText>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            tts,
            stt,
        }
    }

    /// Wires the production adapters, sharing one HTTP connection pool.
    pub fn from_providers(
        config: ApiConfig,
        providers: &ProviderConfig,
        store: Arc<dyn PromptStore>,
        agent_model: Option<&str>,
    ) -> Self {
        let http = reqwest::Client::new();
        let chat = Arc::new(OpenAiClient::with_http_client(http.clone(), providers));
        let orchestrator = Orchestrator::with_agent_model(
            chat,
            store,
            agent_model.unwrap_or(DEFAULT_AGENT_MODEL),
        );

        Self::new(
            config,
            orchestrator,
            Arc::new(ElevenLabsClient::with_http_client(http.clone(), providers)),
            Arc::new(WhisperClient::with_http_client(http, providers)),
        )
    }
}
