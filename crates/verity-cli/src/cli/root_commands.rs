use clap::{Args, Subcommand};

use crate::cli::subcommands::{CheckCommands, HistoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fact-check text or an image.
    Check {
        #[command(subcommand)]
        action: CheckCommands,
    },
    /// Past analyses, most recent first.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Produce a share link for an analysis.
    Share(ShareArgs),
    /// Open a share link or token.
    Open(OpenArgs),
    /// Check that the analysis backend is up.
    Health,
    /// Print the JSON Schema for a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ShareArgs {
    /// History entry to share (default: most recent).
    pub id: Option<String>,
    /// Print the link without copying it to the clipboard.
    #[arg(long)]
    pub no_copy: bool,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// A share URL (`...?result=<token>`) or a bare token.
    pub link: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `analysis_result`. Omit to list available types.
    pub type_name: Option<String>,
}
