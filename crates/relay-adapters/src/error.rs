//! Error types for the adapter crate.

use thiserror::Error;

/// Errors returned by provider adapters.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The provider credential was not configured. Raised before any network call.
    #[error("{provider} API key is not configured")]
    CredentialMissing {
        /// Human-readable provider name.
        provider: &'static str,
    },

    /// The provider call failed: transport error, non-success status or unusable body.
    #[error("{0}")]
    UpstreamFailure(String),
}

impl AdapterError {
    /// Returns true if the error was raised because a credential is missing.
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, Self::CredentialMissing { .. })
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        AdapterError::UpstreamFailure(format!("HTTP request failed: {}", err))
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
