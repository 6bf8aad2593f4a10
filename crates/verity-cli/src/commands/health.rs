use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `verity health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.session.backend();
    let progress = Progress::spinner(&format!("Contacting {}...", client.base_url()));
    let health = client.health().await;
    progress.finish_clear();

    let health = health.with_context(|| format!("backend at {} is unreachable", client.base_url()))?;
    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "backend reports a non-healthy status");
    }
    output(&health, flags.format)
}
