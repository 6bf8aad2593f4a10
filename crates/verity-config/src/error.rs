//! Errors raised while assembling [`crate::VerityConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `VERITY_*` variable could not be merged or extracted.
    #[error("failed to load verity configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Loaded fine, but the value is unusable (bad URL, zero capacity).
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
