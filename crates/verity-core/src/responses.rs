//! CLI response types returned as JSON by `verity` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisResult, VerdictTally};
use crate::enums::ScoreBand;

/// A displayed result: `verity check` and `verity open`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisView {
    pub result: AnalysisResult,
    pub band: ScoreBand,
    pub tally: VerdictTally,
}

impl From<AnalysisResult> for AnalysisView {
    fn from(result: AnalysisResult) -> Self {
        Self {
            band: result.band(),
            tally: result.tally(),
            result,
        }
    }
}

/// One row of `verity history list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub score: u8,
    pub band: ScoreBand,
    pub claims: usize,
    pub input_preview: String,
    pub timestamp: String,
}

impl From<&AnalysisResult> for HistoryEntry {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            id: result.id.clone(),
            score: result.score.get(),
            band: result.band(),
            claims: result.claims.len(),
            input_preview: result.input_preview.clone(),
            timestamp: result.parsed_timestamp().map_or_else(
                || result.timestamp.clone(),
                |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        }
    }
}

/// Response from `verity history list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryListResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

/// Response from `verity history clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryClearResponse {
    pub removed: usize,
}

/// Response from `verity share`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShareResponse {
    pub id: String,
    pub url: String,
    pub copied: bool,
}

/// Backend health as reported by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
    pub version: String,
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
