use anyhow::bail;
use schemars::schema_for;
use serde_json::Value;
use verity_core::entities::{AnalysisResult, Claim, Source};
use verity_core::responses::{
    AnalysisView, HealthStatus, HistoryClearResponse, HistoryEntry, HistoryListResponse,
    ShareResponse,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &[&str] = &[
    "analysis_result",
    "claim",
    "source",
    "analysis_view",
    "history_entry",
    "history_list_response",
    "history_clear_response",
    "share_response",
    "health_status",
];

/// Handle `verity schema [TYPE]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(name) = args.type_name.as_deref() else {
        return output(&TYPE_NAMES, flags.format);
    };
    match schema_by_name(name)? {
        Some(schema) => output(&schema, flags.format),
        None => bail!(
            "unknown schema type '{name}'. Available: {}",
            TYPE_NAMES.join(", ")
        ),
    }
}

fn schema_by_name(name: &str) -> anyhow::Result<Option<Value>> {
    let schema = match name {
        "analysis_result" => schema_for!(AnalysisResult),
        "claim" => schema_for!(Claim),
        "source" => schema_for!(Source),
        "analysis_view" => schema_for!(AnalysisView),
        "history_entry" => schema_for!(HistoryEntry),
        "history_list_response" => schema_for!(HistoryListResponse),
        "history_clear_response" => schema_for!(HistoryClearResponse),
        "share_response" => schema_for!(ShareResponse),
        "health_status" => schema_for!(HealthStatus),
        _ => return Ok(None),
    };
    Ok(Some(serde_json::to_value(schema)?))
}
