//! Speech adapters: streaming text-to-speech and batch transcription.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::{AdapterError, Result};

/// Stream of synthesized audio chunks.
pub type AudioStream = BoxStream<'static, Result<Bytes>>;

/// Media type of synthesized audio.
pub const AUDIO_MEDIA_TYPE: &str = "audio/mpeg";

/// Converts text into a stream of audio bytes.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Start synthesis. The upstream status has been checked when this returns `Ok`.
    async fn synthesize(&self, text: &str) -> Result<AudioStream>;
}

/// Converts recorded audio into text.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a complete audio file.
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// ElevenLabs streaming text-to-speech client.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    voice_id: String,
    model_id: String,
}

impl ElevenLabsClient {
    /// Create a client from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client that shares an existing HTTP connection pool.
    pub fn with_http_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.elevenlabs_api_key.clone(),
            base_url: config.elevenlabs_base_url.clone(),
            voice_id: config.voice_id.clone(),
            model_id: config.tts_model.clone(),
        }
    }
}

#[async_trait]
impl TextToSpeech for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<AudioStream> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AdapterError::CredentialMissing {
                provider: "ElevenLabs",
            })?;

        let url = format!("{}/text-to-speech/{}/stream", self.base_url, self.voice_id);
        debug!(voice_id = %self.voice_id, chars = text.len(), "Requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header(reqwest::header::ACCEPT, AUDIO_MEDIA_TYPE)
            .json(&SynthesisRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Speech synthesis rejected");
            return Err(AdapterError::UpstreamFailure(format!(
                "ElevenLabs API error {}: {}",
                status, body
            )));
        }

        Ok(response.bytes_stream().map_err(AdapterError::from).boxed())
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Whisper transcription client for an OpenAI-compatible API.
#[derive(Clone)]
pub struct WhisperClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl WhisperClient {
    /// Create a client from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client that shares an existing HTTP connection pool.
    pub fn with_http_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.transcription_model.clone(),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AdapterError::CredentialMissing { provider: "OpenAI" })?;

        debug!(bytes = audio.len(), file_name = %file_name, "Requesting transcription");

        let part = reqwest::multipart::Part::bytes(audio).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Transcription rejected");
            return Err(AdapterError::UpstreamFailure(format!(
                "OpenAI API error {}: {}",
                status, body
            )));
        }

        let transcript: TranscriptionResponse = response.json().await.map_err(|e| {
            AdapterError::UpstreamFailure(format!("Failed to parse transcription: {}", e))
        })?;
        Ok(transcript.text)
    }
}
