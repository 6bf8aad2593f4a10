//! # verity-session
//!
//! The page-level flow of a Verity client: submit text or an image, show the
//! result, keep history, share and open result links.
//!
//! A [`Session`] owns the display state and a notification queue. Failures
//! never escape as panics or half-updated state; they become
//! [`Notification`]s and typed outcomes:
//! - analyses end as [`AnalysisOutcome`]
//! - opened links end as [`LinkOutcome`]
//! - shares end as [`ShareOutcome`] or [`ShareError`]

mod clipboard;
mod display;
mod error;
mod notification;
mod sequencer;
mod session;

pub use clipboard::{Clipboard, ClipboardError};
pub use display::DisplayState;
pub use error::ShareError;
pub use notification::{Notification, NotificationKind};
pub use sequencer::{RequestSequencer, Ticket};
pub use session::{AnalysisOutcome, LinkOutcome, Session, ShareOutcome};
