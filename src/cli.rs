use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "arcadia",
    about = "Project Arcadia - build a character sheet step by step in the terminal",
    version,
    after_help = "Logs are written to: ~/.local/share/arcadia/logs/arcadia.log\nConfig is read from: ~/.config/arcadia/config.toml"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    /// Directory for exported sheets
    #[arg(short, long, help = "Directory exported sheets are written to")]
    pub export_dir: Option<PathBuf>,

    /// Sheet to open on startup
    #[arg(short, long, help = "Character sheet (.json) to open on the summary step")]
    pub import: Option<PathBuf>,
}
