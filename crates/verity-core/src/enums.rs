//! Verdict and score-band enums for Verity.
//!
//! `Verdict` uses the backend's upper-case wire labels (`TRUE`, `FALSE`,
//! `UNSURE`). Any other label deserializes to [`Verdict::Unknown`] instead of
//! failing, so one odd claim never makes a whole result unreadable.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Verdict assigned to a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    True,
    False,
    Unsure,
    /// The backend sent a label outside the known set.
    Unknown,
}

impl Verdict {
    /// All verdicts the backend is expected to produce.
    pub const KNOWN: [Self; 3] = [Self::True, Self::False, Self::Unsure];

    /// Return the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Unsure => "UNSURE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire label. Matching is case-insensitive; anything else maps
    /// to [`Verdict::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::KNOWN
            .into_iter()
            .find(|verdict| verdict.as_str().eq_ignore_ascii_case(label))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Cow::<'de, str>::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl JsonSchema for Verdict {
    fn schema_name() -> Cow<'static, str> {
        "Verdict".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Claim verdict: TRUE, FALSE or UNSURE. Other labels are read as UNKNOWN."
        })
    }
}

// ---------------------------------------------------------------------------
// ScoreBand
// ---------------------------------------------------------------------------

/// Coarse credibility band used when presenting a score.
///
/// ```text
/// 70..=100 → high
/// 40..=69  → mixed
///  0..=39  → low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Mixed,
    Low,
}

impl ScoreBand {
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 40 {
            Self::Mixed
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mixed => "mixed",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
