//! Share-link codec error types.

use thiserror::Error;

/// A result could not be turned into a token.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A token could not be turned back into a result.
///
/// Each variant names the decoding stage that failed. Callers treat all of
/// them the same way: ignore the token and tell the user the link is invalid.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("share token is empty")]
    Empty,

    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share token is not valid UTF-8 after {stage}")]
    Utf8 { stage: &'static str },

    #[error("malformed percent-escape at byte {offset}")]
    PercentEscape { offset: usize },

    #[error("share token does not contain valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("share token does not describe an analysis result: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("share token format v{found} is newer than supported v{supported}")]
    UnsupportedVersion { found: u64, supported: u64 },
}
