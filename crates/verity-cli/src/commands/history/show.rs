use verity_core::CoreError;
use verity_core::responses::AnalysisView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryShowArgs;
use crate::context::AppContext;
use crate::output::output_analysis;

pub fn handle(args: &HistoryShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = ctx
        .session
        .history_entry(&args.id)
        .ok_or_else(|| CoreError::NotFound {
            id: args.id.clone(),
        })?;
    output_analysis(&AnalysisView::from(result), flags.format)
}
