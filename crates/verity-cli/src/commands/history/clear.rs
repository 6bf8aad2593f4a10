use verity_core::responses::HistoryClearResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::notifications;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.session.clear_history();
    notifications::flush(&ctx.session);
    output(&HistoryClearResponse { removed }, flags.format)
}
