use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "podkit-cleanup",
    version,
    about = "Reclaim GPU memory, heap and stale output images between generation batches"
)]
pub struct CleanupCli {
    #[arg(long, value_enum, default_value_t = CleanupMode::All, help = "Cleanup mode")]
    pub mode: CleanupMode,
    #[arg(long, help = "Output results as JSON")]
    pub json: bool,
    #[arg(
        long,
        help = "Config file (defaults to ~/.config/podkit/cleanup.toml when present)"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CleanupMode {
    Gpu,
    Memory,
    Files,
    Models,
    All,
}

#[derive(Parser, Debug)]
#[command(
    name = "podkit-strip-word",
    version,
    about = "Remove every occurrence of a literal word from a text file"
)]
pub struct StripWordCli {
    #[arg(help = "Text file to rewrite in place")]
    pub file: PathBuf,
    #[arg(help = "Literal, case-sensitive text to remove")]
    pub word: String,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "podkit-add-text",
    version,
    about = "Append text to every line starting with \"prompt\""
)]
pub struct AddTextCli {
    #[arg(help = "Text appended after a single space")]
    pub text_to_add: String,
    #[arg(long, help = "Text file to rewrite in place")]
    pub file: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
