use anyhow::bail;
use verity_core::responses::AnalysisView;
use verity_session::LinkOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands::shared::notifications;
use crate::context::AppContext;
use crate::output::output_analysis;

/// Handle `verity open <URL|TOKEN>`. Opened results are not added to history.
pub fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.session.open_link(&args.link);
    notifications::flush(&ctx.session);

    match outcome {
        LinkOutcome::Opened(result) => output_analysis(&AnalysisView::from(result), flags.format),
        LinkOutcome::NoToken => bail!("'{}' carries no `result` share token", args.link),
        LinkOutcome::Invalid(error) => {
            Err(anyhow::Error::new(error).context("invalid shared link"))
        }
    }
}
