//! Entity structs for the analysis data model.
//!
//! Field names follow the backend's camelCase JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod analysis;
mod claim;

pub use analysis::{AnalysisResult, VerdictTally};
pub use claim::{Claim, Source};
