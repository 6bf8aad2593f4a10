//! # verity-core
//!
//! Core types, validation, and error types for Verity.
//!
//! This crate provides the foundational types shared across all Verity crates:
//! - The analysis data model (results, claims, sources) as returned by the backend
//! - Verdict and score-band enums
//! - Pre-flight input validation for text and image submissions
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod score;
pub mod validation;

pub use entities::{AnalysisResult, Claim, Source, VerdictTally};
pub use enums::{ScoreBand, Verdict};
pub use errors::{CoreError, ValidationError};
pub use score::Score;
