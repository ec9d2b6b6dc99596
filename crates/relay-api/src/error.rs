//! API error types.
//!
//! Every failure is reported as HTTP 200 with an `{"error": message}` body;
//! callers tell success from failure by the body shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_adapters::AdapterError;
use relay_orchestrator::{ErrorKind, OrchestratorError};
use thiserror::Error;
use tracing::warn;

use crate::types::ErrorResponse;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error carrying the user-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A provider credential is not configured.
    #[error("{0}")]
    CredentialMissing(String),

    /// A provider call failed.
    #[error("{0}")]
    Upstream(String),

    /// A loop stopped on a local failure, or the request could not be used.
    #[error("{0}")]
    Aborted(String),
}

impl ApiError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::CredentialMissing(_) => ErrorKind::CredentialMissing,
            ApiError::Upstream(_) => ErrorKind::UpstreamFailure,
            ApiError::Aborted(_) => ErrorKind::Aborted,
        }
    }

    /// Map a speech adapter failure, replacing provider detail with `failure`.
    pub fn speech(err: AdapterError, failure: &str) -> Self {
        match err {
            AdapterError::CredentialMissing { provider } => {
                ApiError::CredentialMissing(format!("{} API key is not configured.", provider))
            }
            AdapterError::UpstreamFailure(detail) => {
                warn!(error = %detail, "Speech provider call failed");
                ApiError::Upstream(failure.to_string())
            }
        }
    }
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        warn!(error = %err, "Request failed");
        let message = err.user_message();
        match err.kind() {
            ErrorKind::CredentialMissing => ApiError::CredentialMissing(message),
            ErrorKind::UpstreamFailure => ApiError::Upstream(message),
            ErrorKind::Aborted => ApiError::Aborted(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::OK, body).into_response()
    }
}
