//! Provider adapters for the relay.
//!
//! Each adapter wraps one third-party network service behind a narrow
//! async trait:
//! - [`ChatCompletion`]: chat completions ([`OpenAiClient`])
//! - [`TextToSpeech`]: streaming speech synthesis ([`ElevenLabsClient`])
//! - [`SpeechToText`]: audio transcription ([`WhisperClient`])
//!
//! Credentials come from [`ProviderConfig`] at construction time. An adapter
//! without its key fails every call with [`AdapterError::CredentialMissing`]
//! before touching the network.
//!
//! # Example
//!
//! ```no_run
//! use relay_adapters::{ChatCompletion, ChatMessage, CompletionRequest, OpenAiClient, ProviderConfig};
//!
//! # async fn example() -> relay_adapters::Result<()> {
//! let client = OpenAiClient::new(&ProviderConfig::from_env());
//! let reply = client
//!     .complete(CompletionRequest::new("gpt-4.1", vec![ChatMessage::user("2+2?")]))
//!     .await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod speech;

pub use chat::{ChatCompletion, ChatMessage, CompletionRequest, MessageRole, OpenAiClient};
pub use config::ProviderConfig;
pub use error::{AdapterError, Result};
pub use speech::{
    AudioStream, ElevenLabsClient, SpeechToText, TextToSpeech, WhisperClient, AUDIO_MEDIA_TYPE,
};
