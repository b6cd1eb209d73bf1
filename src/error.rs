//! Unified error types for retag
//!
//! Error strategy:
//! - Per-file errors (name, format, I/O): Recoverable, skip and continue
//! - Enumeration errors (bad root path): Fatal, abort before any file is touched
//!
//! Every variant carries a human-readable reason that is shown next to the
//! offending path in the run summary.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Supported audio formats for helpful error messages
pub const SUPPORTED_FORMATS: &str = "MP3, FLAC";

/// Expected file name layout for helpful error messages
pub const EXPECTED_NAME: &str = "\"Artist - Title.mp3\" or \"Artist - Title.flac\"";

/// Top-level error type for retag operations
#[derive(Debug, Error)]
pub enum RetagError {
    // =========================================================================
    // Recoverable errors - skip file, continue batch
    // =========================================================================
    #[error("{reason}: {}\n  Tip: Files must be named {EXPECTED_NAME}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("{reason}: {}\n  Supported formats: {SUPPORTED_FORMATS}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("{reason}: {}", path.display())]
    Io { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal errors - abort the run
    // =========================================================================
    #[error("Cannot scan '{}': {reason}\n  Tip: Check the path is correct and readable", path.display())]
    Enumeration { path: PathBuf, reason: String },
}

/// Result type alias for retag operations
pub type Result<T> = std::result::Result<T, RetagError>;

impl RetagError {
    /// Returns true if this error is recoverable (should skip file, continue batch)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RetagError::Parse { .. } | RetagError::Format { .. } | RetagError::Io { .. }
        )
    }

    /// The short reason, without the path or tips
    pub fn reason(&self) -> &str {
        match self {
            RetagError::Parse { reason, .. }
            | RetagError::Format { reason, .. }
            | RetagError::Io { reason, .. }
            | RetagError::Enumeration { reason, .. } => reason,
        }
    }

    /// The path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            RetagError::Parse { path, .. }
            | RetagError::Format { path, .. }
            | RetagError::Io { path, .. }
            | RetagError::Enumeration { path, .. } => path,
        }
    }

    /// Create a file name parse error
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        RetagError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for a file whose content is not a supported container
    pub fn unsupported(path: impl Into<PathBuf>) -> Self {
        RetagError::Format {
            path: path.into(),
            reason: "Unsupported or mismatched audio format".to_string(),
        }
    }

    /// Create a fatal enumeration error
    pub fn enumeration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        RetagError::Enumeration {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error, translating common failure kinds into plain words
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            std::io::ErrorKind::NotFound => "File disappeared during processing".to_string(),
            std::io::ErrorKind::UnexpectedEof => "File is truncated".to_string(),
            std::io::ErrorKind::StorageFull => "Disk full".to_string(),
            _ => format!("I/O error ({})", err),
        };
        RetagError::Io { path, reason }
    }

    /// Create an I/O error from a tag codec failure (corrupt container, write failure)
    pub fn lofty_error(path: impl Into<PathBuf>, err: lofty::error::LoftyError) -> Self {
        let path = path.into();
        match err.kind() {
            lofty::error::ErrorKind::Io(io) => {
                let io = std::io::Error::new(io.kind(), io.to_string());
                RetagError::io_error(path, io)
            }
            _ => RetagError::Io {
                path,
                reason: format!("Failed to rewrite tags ({})", err),
            },
        }
    }
}

/// Extension trait for adding file context to I/O results
pub trait ErrorContext<T> {
    /// Attach the path being processed to an I/O error
    fn with_file_context(self, path: &Path) -> Result<T>;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_file_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| RetagError::io_error(path, e))
    }
}
