//! Client error types

use shared::response::EnvelopeError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, TLS, broken body)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No response within the configured window
    #[error("request timeout")]
    Timeout,

    /// The caller's cancellation token fired while the call was in flight
    #[error("request cancelled")]
    Cancelled,

    /// The remote reported a business error (`status: "error"`)
    #[error("{0}")]
    Remote(String),

    /// The response body did not match the action's schema
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether this is the remote's referential-integrity hint for
    /// `deleteCategory` -- the signal to re-ask with `force=true` after the
    /// operator confirms.
    pub fn is_category_conflict(&self) -> bool {
        matches!(self, Self::Remote(message) if message.contains("force=true"))
    }
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Remote(message) => Self::Remote(message),
            EnvelopeError::Decode(message) => Self::Decode(message),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
