//! # verity-share
//!
//! Shareable result links for Verity.
//!
//! A result is embedded in a link as `?result=<token>`, where the token is
//! `base64(percent-encode(JSON))` with a format-version tag inside the JSON.
//! Opening such a link rebuilds the result without contacting the backend.
//!
//! ```
//! use verity_share::{decode, encode};
//! # fn demo(result: &verity_core::AnalysisResult) -> Result<(), Box<dyn std::error::Error>> {
//! let token = encode(result)?;
//! assert_eq!(&decode(&token)?, result);
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod link;

pub use codec::{CODEC_VERSION, decode, encode};
pub use error::{DecodeError, EncodeError};
pub use link::{SHARE_PARAM, page_base, share_url, token_from_url};
