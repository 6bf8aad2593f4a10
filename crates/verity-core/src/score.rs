//! Credibility score newtype.
//!
//! The backend computes the score as a float rounded to one decimal place.
//! On the wire any JSON number in `0..=100` is accepted and rounded to the
//! nearest integer; anything else is rejected at deserialization time.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::ScoreBand;
use crate::errors::CoreError;

/// Credibility score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    /// Build a score, rejecting values above 100.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `value > 100`.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::Validation(format!(
                "score {value} is outside 0..={}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Round a fractional score (as emitted by the backend) to a `Score`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for NaN or values outside `0..=100`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(0.0..=f64::from(Self::MAX)).contains(&value) {
            return Err(CoreError::Validation(format!(
                "score {value} is outside 0..={}",
                Self::MAX
            )));
        }
        Ok(Self(value.round() as u8))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn band(self) -> ScoreBand {
        ScoreBand::for_score(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

struct ScoreVisitor;

impl Visitor<'_> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number between 0 and 100")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Score, E> {
        u8::try_from(value)
            .map_err(|_| E::custom(format!("score {value} is outside 0..=100")))
            .and_then(|v| Score::new(v).map_err(E::custom))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Score, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("score {value} is outside 0..=100")))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Score, E> {
        Score::from_f64(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

impl JsonSchema for Score {
    fn schema_name() -> Cow<'static, str> {
        "Score".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "number",
            "minimum": 0,
            "maximum": 100
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn rejects_out_of_range() {
        assert!(Score::new(101).is_err());
        assert!(Score::new(100).is_ok());
        assert!(Score::from_f64(-0.5).is_err());
        assert!(Score::from_f64(f64::NAN).is_err());
    }

    #[rstest]
    #[case("85", 85)]
    #[case("0", 0)]
    #[case("66.7", 67)]
    #[case("50.0", 50)]
    #[case("33.3", 33)]
    #[case("99.5", 100)]
    fn deserializes_integers_and_floats(#[case] json: &str, #[case] expected: u8) {
        let score: Score = serde_json::from_str(json).unwrap();
        assert_eq!(score.get(), expected);
    }

    #[rstest]
    #[case("101")]
    #[case("-1")]
    #[case("100.6")]
    #[case("\"85\"")]
    #[case("null")]
    fn rejects_invalid_wire_values(#[case] json: &str) {
        assert!(serde_json::from_str::<Score>(json).is_err());
    }

    #[test]
    fn serializes_as_integer() {
        let score = Score::new(72).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "72");
        assert_eq!(score.band(), ScoreBand::High);
    }
}
