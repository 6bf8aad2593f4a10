use verity_client::ImageUpload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CheckImageArgs;
use crate::context::AppContext;
use crate::progress::Progress;

pub async fn handle(args: &CheckImageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let upload = ImageUpload::from_path(&args.path).await?;

    let progress = Progress::spinner(&format!("Extracting and verifying claims from {}...", upload.filename()));
    let outcome = ctx.session.analyze_image(upload).await;
    super::report(outcome, &progress, ctx, flags)
}
