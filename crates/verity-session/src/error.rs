//! Session error types.

use thiserror::Error;
use verity_share::EncodeError;

/// Why a share link could not be produced.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no result is displayed")]
    NothingToShare,

    #[error("could not generate share link: {0}")]
    Encode(#[from] EncodeError),
}
