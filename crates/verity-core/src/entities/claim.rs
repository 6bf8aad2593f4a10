use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Verdict;

/// A web source cited as evidence for a claim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    pub domain: String,
    pub title: String,
    pub url: String,
}

/// A single checkable statement extracted from the input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Claim {
    /// Unique within its result.
    pub id: String,
    pub text: String,
    pub verdict: Verdict,
    pub explanation: String,
    /// Citation order is meaningful and preserved.
    pub sources: Vec<Source>,
}
