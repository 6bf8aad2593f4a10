use std::io::{IsTerminal, Read};

use anyhow::{Context, bail};
use verity_core::validation;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CheckTextArgs;
use crate::context::AppContext;
use crate::progress::Progress;

pub async fn handle(args: &CheckTextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_input(args)?;

    // Reject early so a short input never starts the spinner.
    validation::validate(&text)?;
    tracing::debug!(
        chars = text.chars().count(),
        estimated_claims = validation::estimate_claims(&text),
        "submitting text"
    );

    let progress = Progress::spinner("Analyzing claims...");
    let outcome = ctx.session.analyze_text(&text).await;
    super::report(outcome, &progress, ctx, flags)
}

fn read_input(args: &CheckTextArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no text given: pass it as an argument, with --file, or on stdin");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}
