//! Cross-cutting error types for Verity.
//!
//! Domain-specific errors (`PersistenceError`, `DecodeError`, `ClientError`)
//! are defined in their respective crates. The binary converges everything on
//! `anyhow` at the top level.

use thiserror::Error;

/// Errors that can be raised by any Verity crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value failed a data-model constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored or shared result could not be found.
    #[error("Analysis not found: {id}")]
    NotFound { id: String },
}

/// Pre-flight rejection of user input. Never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Trimmed text is shorter than the minimum analysable length.
    #[error("Please enter at least {min} characters for meaningful analysis ({actual} given).")]
    TooShort { min: usize, actual: usize },

    /// The selected image file has no content.
    #[error("The selected image is empty.")]
    EmptyImage,

    /// The selected file is not a PNG or JPEG image.
    #[error("Unsupported image '{filename}': only PNG and JPEG are accepted.")]
    UnsupportedImage { filename: String },
}
