use verity_core::responses::{HistoryEntry, HistoryListResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_history;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = ctx.session.history();
    let total = history.len();
    let limit = flags
        .limit
        .map_or(total, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

    let entries = history
        .iter()
        .take(limit)
        .map(HistoryEntry::from)
        .collect::<Vec<_>>();
    let response = HistoryListResponse { entries, total };
    output_history(&response, &response.entries, flags.format)
}
