pub mod image;
pub mod text;

use anyhow::bail;
use verity_core::responses::AnalysisView;
use verity_session::AnalysisOutcome;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CheckCommands;
use crate::commands::shared::notifications;
use crate::context::AppContext;
use crate::output::output_analysis;
use crate::progress::Progress;

pub async fn handle(
    action: &CheckCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CheckCommands::Text(args) => text::handle(args, ctx, flags).await,
        CheckCommands::Image(args) => image::handle(args, ctx, flags).await,
    }
}

/// Turn an analysis outcome into output or an error exit.
fn report(
    outcome: AnalysisOutcome,
    progress: &Progress,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match outcome {
        AnalysisOutcome::Completed(result) => {
            progress.finish_clear();
            notifications::flush(&ctx.session);
            output_analysis(&AnalysisView::from(result), flags.format)
        }
        AnalysisOutcome::Failed(error) => {
            progress.finish_err("analysis failed");
            notifications::flush(&ctx.session);
            Err(anyhow::Error::new(error).context("analysis failed"))
        }
        AnalysisOutcome::Invalid(error) => {
            progress.finish_clear();
            Err(error.into())
        }
        AnalysisOutcome::Superseded => {
            progress.finish_clear();
            bail!("analysis was superseded by a newer request")
        }
    }
}
