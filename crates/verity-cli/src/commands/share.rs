use anyhow::bail;
use verity_core::CoreError;
use verity_core::responses::ShareResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShareArgs;
use crate::clipboard::SystemClipboard;
use crate::commands::shared::notifications;
use crate::context::AppContext;
use crate::output::output;

/// Handle `verity share [ID] [--no-copy]`.
pub fn handle(args: &ShareArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = &ctx.session;
    let id = match &args.id {
        Some(id) => id.clone(),
        None => match session.latest_entry() {
            Some(latest) => latest.id,
            None => bail!("no analyses in history yet; run `verity check` first"),
        },
    };
    if session.show_from_history(&id).is_none() {
        return Err(CoreError::NotFound { id }.into());
    }

    let (url, copied) = if args.no_copy {
        (session.share_link()?, false)
    } else {
        let shared = session.share(&SystemClipboard);
        notifications::flush(session);
        let shared = shared?;
        (shared.url, shared.copied)
    };

    output(&ShareResponse { id, url, copied }, flags.format)
}
