//! Backend client error types.

use std::path::PathBuf;

use thiserror::Error;
use verity_core::ValidationError;

/// Errors that can occur when talking to the analysis backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("could not reach the analysis service: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("analysis service error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `detail` from the error body, the raw body, or the status reason.
        message: String,
    },

    /// A 2xx body that is not an analysis result.
    #[error("unexpected response from the analysis service: {0}")]
    Parse(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The upload was rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ClientError {
    /// Text suitable for a user-facing notification body.
    ///
    /// For backend errors this is the server's own explanation, without the
    /// status prefix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a backend error, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
