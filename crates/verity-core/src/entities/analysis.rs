use chrono::{DateTime, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::claim::Claim;
use crate::enums::{ScoreBand, Verdict};
use crate::score::Score;

/// The outcome of one fact-check, as produced by the analysis backend.
///
/// Results are values: the copy shown to the user and the copy kept in
/// history are independent clones, and neither is mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Backend-assigned, unique per analysis.
    pub id: String,
    pub score: Score,
    pub summary_verdict: String,
    /// Citation order; never re-sorted.
    pub claims: Vec<Claim>,
    /// Search queries the backend issued while grounding claims. Absent on
    /// the wire means empty.
    #[serde(default)]
    pub search_queries: Vec<String>,
    /// ISO-8601 creation time, kept verbatim.
    pub timestamp: String,
    pub input_preview: String,
}

impl AnalysisResult {
    #[must_use]
    pub const fn band(&self) -> ScoreBand {
        self.score.band()
    }

    #[must_use]
    pub fn tally(&self) -> VerdictTally {
        VerdictTally::from_claims(&self.claims)
    }

    /// Look up a claim by its id.
    #[must_use]
    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.id == id)
    }

    /// Parse `timestamp` for display.
    ///
    /// Accepts RFC 3339 and the zone-less `isoformat()` shape, which is read
    /// as UTC. Returns `None` when neither parses.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Per-verdict claim counts for one result.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerdictTally {
    pub true_count: usize,
    pub false_count: usize,
    pub unsure_count: usize,
    pub unknown_count: usize,
}

impl VerdictTally {
    #[must_use]
    pub fn from_claims(claims: &[Claim]) -> Self {
        claims.iter().fold(Self::default(), |mut tally, claim| {
            match claim.verdict {
                Verdict::True => tally.true_count += 1,
                Verdict::False => tally.false_count += 1,
                Verdict::Unsure => tally.unsure_count += 1,
                Verdict::Unknown => tally.unknown_count += 1,
            }
            tally
        })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.true_count + self.false_count + self.unsure_count + self.unknown_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Source;
    use pretty_assertions::assert_eq;

    const BACKEND_FIXTURE: &str = r#"{
        "id": "x1",
        "score": 66.7,
        "summaryVerdict": "Mostly credible",
        "claims": [
            {
                "id": "c1-1a2b3c4d",
                "text": "Sky is blue",
                "verdict": "TRUE",
                "explanation": "Rayleigh scattering.",
                "sources": [{"domain": "nasa.gov", "title": "NASA", "url": "https://nasa.gov"}]
            },
            {
                "id": "c2-5e6f7a8b",
                "text": "The moon is cheese",
                "verdict": "FALSE",
                "explanation": "It is rock.",
                "sources": []
            },
            {
                "id": "c3-9c0d1e2f",
                "text": "Cats prefer Tuesdays",
                "verdict": "MISLEADING",
                "explanation": "No data.",
                "sources": []
            }
        ],
        "timestamp": "2024-01-01T00:00:00.123456Z",
        "inputPreview": "Sky is blue and..."
    }"#;

    #[test]
    fn parses_backend_response() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        assert_eq!(result.id, "x1");
        assert_eq!(result.score.get(), 67);
        assert_eq!(result.band(), ScoreBand::Mixed);
        assert!(result.search_queries.is_empty());
        assert_eq!(
            result.claims[0].sources,
            vec![Source {
                domain: "nasa.gov".into(),
                title: "NASA".into(),
                url: "https://nasa.gov".into(),
            }]
        );
        assert_eq!(result.claims[2].verdict, Verdict::Unknown);
    }

    #[test]
    fn claim_order_is_preserved() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        let ids: Vec<&str> = result.claims.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1-1a2b3c4d", "c2-5e6f7a8b", "c3-9c0d1e2f"]);
    }

    #[test]
    fn tally_counts_each_verdict() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        let tally = result.tally();
        assert_eq!(
            tally,
            VerdictTally {
                true_count: 1,
                false_count: 1,
                unsure_count: 0,
                unknown_count: 1,
            }
        );
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn missing_claims_is_a_shape_error() {
        let json = r#"{"id":"x","score":1,"summaryVerdict":"s","timestamp":"t","inputPreview":"p"}"#;
        let err = serde_json::from_str::<AnalysisResult>(json).unwrap_err();
        assert!(err.to_string().contains("claims"));
    }

    #[test]
    fn serializes_camel_case_fields() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("summaryVerdict").is_some());
        assert!(value.get("inputPreview").is_some());
        assert_eq!(value["searchQueries"], serde_json::json!([]));
        assert_eq!(value["score"], serde_json::json!(67));
    }

    #[test]
    fn parses_timestamps() {
        let mut result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        let parsed = result.parsed_timestamp().expect("rfc3339");
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00.123456+00:00");

        result.timestamp = "2024-03-05T10:20:30.5".into();
        assert!(result.parsed_timestamp().is_some());

        result.timestamp = "yesterday".into();
        assert!(result.parsed_timestamp().is_none());
    }

    #[test]
    fn claim_lookup_by_id() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_FIXTURE).unwrap();
        assert_eq!(
            result.claim("c2-5e6f7a8b").map(|c| c.text.as_str()),
            Some("The moon is cheese")
        );
        assert!(result.claim("nope").is_none());
    }
}
