pub mod clear;
pub mod list;
pub mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;

pub fn handle(action: &HistoryCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => list::handle(ctx, flags),
        HistoryCommands::Show(args) => show::handle(args, ctx, flags),
        HistoryCommands::Clear => clear::handle(ctx, flags),
    }
}
