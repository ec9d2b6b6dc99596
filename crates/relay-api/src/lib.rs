//! REST API for the LLM relay.
//!
//! This crate exposes the relay flows over HTTP:
//! - Single-turn chat with page context
//! - Coder / Product_Manager agent dialogue
//! - Worker / Critic / Prompt-Engineer self-improvement
//! - Intent-routed orchestration with a `{type, data}` envelope
//! - Text-to-speech streaming and speech-to-text uploads
//!
//! Failures are answered with HTTP 200 and an `{"error": ...}` body.
//!
//! # Example
//!
//! ```ignore
//! use relay_adapters::ProviderConfig;
//! use relay_api::{serve, ApiConfig, AppState};
//! use relay_persistence::FilePromptStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let store = Arc::new(FilePromptStore::default());
//!     let state = AppState::from_providers(config.clone(), &ProviderConfig::from_env(), store, None);
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::Cli;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
