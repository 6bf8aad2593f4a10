use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Check { action } => commands::check::handle(&action, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Share(args) => commands::share::handle(&args, ctx, flags),
        Commands::Open(args) => commands::open::handle(&args, ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
