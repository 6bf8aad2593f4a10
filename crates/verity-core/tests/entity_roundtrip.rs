//! Serde roundtrip and JsonSchema validation tests for the data model.

use schemars::schema_for;
use verity_core::entities::*;
use verity_core::enums::*;
use verity_core::responses::*;
use verity_core::score::Score;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        id: "8b0f4c1e-9a7d-4d51-b2a4-0f3c6e1d2a9b".into(),
        score: Score::new(72).unwrap(),
        summary_verdict: "Mixed credibility: some claims verified, others lack evidence.".into(),
        claims: vec![
            Claim {
                id: "c1".into(),
                text: "Global temperatures have risen by 1.1°C since pre-industrial times.".into(),
                verdict: Verdict::True,
                explanation: "Consistent with NASA, NOAA and IPCC AR6.".into(),
                sources: vec![
                    Source {
                        domain: "nasa.gov".into(),
                        title: "Global Temperature | NASA".into(),
                        url: "https://climate.nasa.gov/vital-signs/global-temperature/".into(),
                    },
                    Source {
                        domain: "ipcc.ch".into(),
                        title: "AR6 Climate Change 2021".into(),
                        url: "https://www.ipcc.ch/report/ar6/wg1/".into(),
                    },
                ],
            },
            Claim {
                id: "c2".into(),
                text: "AI models can now pass the Turing test consistently.".into(),
                verdict: Verdict::Unsure,
                explanation: "No consensus on rigorous evaluations.".into(),
                sources: vec![],
            },
        ],
        search_queries: vec!["global temperature rise since 1850".into()],
        timestamp: "2024-01-01T00:00:00Z".into(),
        input_preview: "Global temperatures have risen by 1.1°C since...".into(),
    }
}

roundtrip_and_validate!(analysis_result_roundtrip, AnalysisResult, sample_result());

roundtrip_and_validate!(
    claim_roundtrip,
    Claim,
    Claim {
        id: "c9".into(),
        text: "Le café réduit la fatigue ☕".into(),
        verdict: Verdict::False,
        explanation: "Effet temporaire seulement.".into(),
        sources: vec![],
    }
);

roundtrip_and_validate!(
    analysis_view_roundtrip,
    AnalysisView,
    AnalysisView::from(sample_result())
);

roundtrip_and_validate!(
    history_list_roundtrip,
    HistoryListResponse,
    HistoryListResponse {
        entries: vec![HistoryEntry::from(&sample_result())],
        total: 1,
    }
);

roundtrip_and_validate!(
    share_response_roundtrip,
    ShareResponse,
    ShareResponse {
        id: "x1".into(),
        url: "http://localhost:8080/?result=abc".into(),
        copied: false,
    }
);

roundtrip_and_validate!(
    health_roundtrip,
    HealthStatus,
    HealthStatus {
        message: "AI-Powered Fact Checker API is running".into(),
        version: "1.0.0".into(),
        status: "healthy".into(),
    }
);

#[test]
fn unknown_verdict_still_matches_schema() {
    let schema = serde_json::to_value(schema_for!(Claim)).unwrap();
    let instance = serde_json::json!({
        "id": "c1",
        "text": "t",
        "verdict": "MOSTLY_TRUE",
        "explanation": "e",
        "sources": []
    });
    assert!(validate_against_schema(&schema, &instance).is_empty());
    let claim: Claim = serde_json::from_value(instance).unwrap();
    assert_eq!(claim.verdict, Verdict::Unknown);
}

#[test]
fn history_entry_summarizes_result() {
    let entry = HistoryEntry::from(&sample_result());
    assert_eq!(entry.score, 72);
    assert_eq!(entry.band, ScoreBand::High);
    assert_eq!(entry.claims, 2);
    assert_eq!(entry.timestamp, "2024-01-01 00:00:00 UTC");
}
