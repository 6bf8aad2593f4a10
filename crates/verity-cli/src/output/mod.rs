use serde::Serialize;
use serde_json::Value;
use verity_core::responses::{AnalysisView, HistoryEntry};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::TableOptions;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_generic_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print an analysis; the table form is a summary plus one row per claim.
pub fn output_analysis(view: &AnalysisView, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(view, format);
    }
    println!("{}", render_analysis(view, table_options()));
    Ok(())
}

/// Print history rows; the table form drops the envelope.
pub fn output_history<T: Serialize>(
    envelope: &T,
    entries: &[HistoryEntry],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(envelope, format);
    }
    if entries.is_empty() {
        println!("(no analyses yet)");
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                entry.score.to_string(),
                entry.band.to_string(),
                entry.claims.to_string(),
                entry.timestamp.clone(),
                entry.input_preview.clone(),
            ]
        })
        .collect::<Vec<_>>();
    println!(
        "{}",
        table::render_rows(
            &["id", "score", "band", "claims", "analyzed", "input"],
            &rows,
            table_options()
        )
    );
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_analysis(view: &AnalysisView, options: TableOptions) -> String {
    let result = &view.result;
    let tally = &view.tally;
    let mut fields = vec![
        ("id", result.id.clone()),
        ("score", format!("{}/100", result.score)),
        ("band", view.band.to_string()),
        ("verdict", result.summary_verdict.clone()),
        (
            "claims",
            format!(
                "{} true, {} false, {} unsure",
                tally.true_count,
                tally.false_count,
                tally.unsure_count + tally.unknown_count
            ),
        ),
        ("analyzed", result.timestamp.clone()),
    ];
    if !result.search_queries.is_empty() {
        fields.push(("searched", result.search_queries.join(" | ")));
    }

    let mut out = table::render_fields(&fields, options);
    if result.claims.is_empty() {
        out.push_str("\n\n(no verifiable claims found)");
        return out;
    }

    let rows = result
        .claims
        .iter()
        .map(|claim| {
            let sources = claim
                .sources
                .iter()
                .map(|source| source.domain.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                claim.id.clone(),
                claim.verdict.to_string(),
                claim.text.clone(),
                if sources.is_empty() { "-".into() } else { sources },
            ]
        })
        .collect::<Vec<_>>();
    out.push_str("\n\n");
    out.push_str(&table::render_rows(
        &["id", "verdict", "claim", "sources"],
        &rows,
        options,
    ));
    out
}

fn render_generic_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Object(map) => {
            let fields = map
                .iter()
                .map(|(key, value)| (key.as_str(), value_to_cell(value)))
                .collect::<Vec<_>>();
            table::render_fields(&fields, options)
        }
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let mut headers = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|h| map.get(h).map_or_else(|| "-".to_string(), value_to_cell))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            table::render_rows(&header_refs, &rows, options)
        }
        other => value_to_cell(&other),
    };
    Ok(rendered)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use verity_core::{AnalysisResult, Claim, Score, Source, Verdict};

    use super::*;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        copied: bool,
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn view() -> AnalysisView {
        AnalysisView::from(AnalysisResult {
            id: "x1".into(),
            score: Score::new(85).unwrap(),
            summary_verdict: "Mostly accurate".into(),
            claims: vec![Claim {
                id: "c1".into(),
                text: "Sky is blue".into(),
                verdict: Verdict::True,
                explanation: "Rayleigh scattering.".into(),
                sources: vec![Source {
                    domain: "nasa.gov".into(),
                    title: "NASA".into(),
                    url: "https://nasa.gov".into(),
                }],
            }],
            search_queries: vec![],
            timestamp: "2024-01-01T00:00:00Z".into(),
            input_preview: "...".into(),
        })
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { id: "x", copied: true }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["copied"], true);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", copied: false }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_lists_fields() {
        let out = render(&Example { id: "x", copied: false }, OutputFormat::Table).unwrap();
        assert!(out.lines().any(|line| line.trim_start().starts_with("copied")));
    }

    #[test]
    fn analysis_table_has_summary_and_claim_rows() {
        let out = render_analysis(&view(), PLAIN);
        assert!(out.contains("85/100"));
        assert!(out.contains("high"));
        assert!(out.contains("1 true, 0 false, 0 unsure"));
        let claim_row = out.lines().last().unwrap();
        assert!(claim_row.contains("TRUE"));
        assert!(claim_row.contains("nasa.gov"));
        assert!(!out.contains("searched"));
    }
}
