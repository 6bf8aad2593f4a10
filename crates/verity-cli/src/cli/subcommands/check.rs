use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CheckCommands {
    /// Fact-check a block of text (at least 50 characters).
    Text(CheckTextArgs),
    /// Fact-check a PNG or JPEG screenshot.
    Image(CheckImageArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckTextArgs {
    /// Text to analyze. Read from --file or stdin when omitted.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,
    /// Read the text from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct CheckImageArgs {
    /// Path to the image.
    pub path: PathBuf,
}
