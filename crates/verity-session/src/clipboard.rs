//! Clipboard seam for the share flow.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for share links.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when no clipboard is reachable.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
