//! Runtime configuration settings

use std::path::PathBuf;

/// Runtime settings for the retag pipeline
///
/// This is the only configuration the pipeline reads; nothing is global.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory (or single file) to process
    pub root: PathBuf,
    /// Scan recursively
    pub recursive: bool,
    /// Dry run mode - parse and detect without writing
    pub dry_run: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        Self {
            root: cli.path.clone(),
            recursive: cli.recursive,
            dry_run: cli.dry_run,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: false,
            dry_run: false,
        }
    }
}
