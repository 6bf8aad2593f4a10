use clap::{Args, Subcommand};

/// History commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List stored analyses.
    List,
    /// Show one stored analysis in full.
    Show(HistoryShowArgs),
    /// Delete all stored analyses.
    Clear,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryShowArgs {
    /// Analysis id.
    pub id: String,
}
