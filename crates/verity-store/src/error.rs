//! Persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or write the persisted history slot.
///
/// These never abort an analysis: the store keeps its in-memory state and the
/// caller surfaces the error as a warning.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem error on a slot file.
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// History could not be serialized.
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the value would exceed the storage quota.
    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: u64, quota: u64 },

    /// The key cannot be mapped onto the storage medium.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}
