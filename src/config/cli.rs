//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// retag - Rewrite audio tags from file names
///
/// Deletes every tag, comment and embedded picture from MP3 and FLAC files,
/// then writes back only Artist and Title taken from names of the form
/// "Artist - Title.mp3". Files are modified in place with no backup.
#[derive(Parser, Debug)]
#[command(name = "retag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory (or single audio file) to process
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Scan subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Dry run - show the tags that would be written without touching files
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only report failures and the summary)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::WARN;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
