//! Core data types for retag
//!
//! These types represent the domain model and flow through the pipeline.
//! None of them outlive the processing of a single file except `RunSummary`.

use crate::error::RetagError;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Supported formats
// =============================================================================

/// Container type of an audio file, as determined from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Flac,
    Unsupported,
}

impl AudioFormat {
    /// Map a file extension (case-insensitive) to the format it promises
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "flac" => Some(AudioFormat::Flac),
            _ => None,
        }
    }

    /// Check if a path has a supported extension
    pub fn is_supported_path(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .is_some()
    }

    /// Short display name used in log lines
    pub fn name(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Flac => "FLAC",
            AudioFormat::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Names and tags
// =============================================================================

/// Artist and title recovered from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub artist: String,
    pub title: String,
}

/// The complete tag payload written to a file
///
/// Writing a `TagSet` replaces every other tag field and picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    pub artist: String,
    pub title: String,
}

impl From<ParsedName> for TagSet {
    fn from(name: ParsedName) -> Self {
        Self {
            artist: name.artist,
            title: name.title,
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

// =============================================================================
// Per-file results
// =============================================================================

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetagOutcome {
    Success { artist: String, title: String },
    ParseFailure { reason: String },
    FormatFailure { reason: String },
    IoFailure { reason: String },
}

impl RetagOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RetagOutcome::Success { .. })
    }

    /// Failure reason, if this outcome is a failure
    pub fn reason(&self) -> Option<&str> {
        match self {
            RetagOutcome::Success { .. } => None,
            RetagOutcome::ParseFailure { reason }
            | RetagOutcome::FormatFailure { reason }
            | RetagOutcome::IoFailure { reason } => Some(reason),
        }
    }
}

/// Outcome of processing a single path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagResult {
    pub path: PathBuf,
    pub outcome: RetagOutcome,
}

impl RetagResult {
    pub fn success(path: PathBuf, tags: TagSet) -> Self {
        Self {
            path,
            outcome: RetagOutcome::Success {
                artist: tags.artist,
                title: tags.title,
            },
        }
    }

    /// Convert a per-file error into a failed result
    ///
    /// Returns the error back if it is not a per-file error.
    pub fn from_error(err: RetagError) -> Result<Self, RetagError> {
        let (path, outcome) = match err {
            RetagError::Parse { path, reason } => (path, RetagOutcome::ParseFailure { reason }),
            RetagError::Format { path, reason } => (path, RetagOutcome::FormatFailure { reason }),
            RetagError::Io { path, reason } => (path, RetagOutcome::IoFailure { reason }),
            fatal @ RetagError::Enumeration { .. } => return Err(fatal),
        };
        Ok(Self { path, outcome })
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// Totals for a whole run, plus every failure with its reason
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Files examined
    pub examined: usize,
    /// Files tagged (or that would have been tagged, in dry run mode)
    pub tagged: usize,
    /// Every skipped file, in processing order
    pub failures: Vec<RetagResult>,
    /// Whether writes were suppressed
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Fold one file's result into the totals
    pub fn record(&mut self, result: RetagResult) {
        self.examined += 1;
        if result.outcome.is_success() {
            self.tagged += 1;
        } else {
            self.failures.push(result);
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run {
            "would be tagged"
        } else {
            "tagged"
        };
        write!(
            f,
            "Processed {} files, {} {}, {} failed",
            self.examined,
            self.tagged,
            verb,
            self.failed()
        )
    }
}
