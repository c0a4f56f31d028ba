//! Error types
//!
//! Two granularities: [`ValidationError`] for a document that cannot yield
//! a usable collection, and [`FetchError`] for the whole fetch call.
//! A single malformed entry is neither; it is dropped during validation.

use thiserror::Error;

/// Document-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document has no `kernelspecs` object
    #[error("No kernelspecs found")]
    MissingKernelspecs,
    /// No entry survived validation, or the declared default did not
    #[error("No valid kernelspecs found")]
    NoValidKernelspecs,
}

/// Failure of a kernel spec fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200
    #[error("Invalid response: {status} {reason}")]
    Transport { status: u16, reason: String },

    /// The base URL could not be turned into a request URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// A 200 response whose body is not JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(#[source] reqwest::Error),

    /// The token or an extra header cannot be sent as an HTTP header
    #[error("Invalid request header '{name}'")]
    InvalidHeader { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FetchError {
    pub(crate) fn transport(status: reqwest::StatusCode) -> Self {
        FetchError::Transport {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// HTTP status for transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The validation failure, if that is what ended the call
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            FetchError::Validation(e) => Some(*e),
            _ => None,
        }
    }
}
