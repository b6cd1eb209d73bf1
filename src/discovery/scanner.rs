//! File discovery and scanning

use crate::error::{RetagError, Result};
use crate::types::AudioFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Lazy, single-pass sequence of candidate audio files
///
/// Paths are produced one at a time while the directory tree is walked, so
/// the full file list is never held in memory. Entries are sorted by file
/// name within each directory.
pub struct AudioFiles {
    walker: walkdir::IntoIter,
}

impl Iterator for AudioFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && AudioFormat::is_supported_path(path) {
                        debug!("Discovered: {}", path.display());
                        return Some(entry.into_path());
                    }
                    trace!("Ignoring {}", path.display());
                }
                Err(e) => {
                    // An unreadable subdirectory must not stop the rest of the walk
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!("Cannot read {}: {}", path, e);
                }
            }
        }
    }
}

/// Scan a path (directory or single file) for audio files
///
/// Fails only when the root itself is unusable; this is the run's one fatal
/// error. Problems with individual entries are logged during iteration.
pub fn scan(root: &Path, recursive: bool) -> Result<AudioFiles> {
    if !root.exists() {
        return Err(RetagError::enumeration(root, "Path does not exist"));
    }

    let root = std::fs::canonicalize(root)
        .map_err(|e| RetagError::enumeration(root, format!("Cannot resolve path ({})", e)))?;

    if root.is_dir() {
        // Surface permission problems now rather than as a silent empty walk
        std::fs::read_dir(&root)
            .map_err(|e| RetagError::enumeration(&root, format!("Cannot list directory ({})", e)))?;
    } else if !AudioFormat::is_supported_path(&root) {
        return Err(RetagError::enumeration(
            &root,
            "Not a directory or a .mp3/.flac file",
        ));
    }

    let walker = if recursive {
        WalkDir::new(&root)
    } else {
        WalkDir::new(&root).max_depth(1)
    };

    debug!(
        "Scanning {} ({})",
        root.display(),
        if recursive { "recursive" } else { "flat" }
    );

    Ok(AudioFiles {
        walker: walker.sort_by_file_name().into_iter(),
    })
}
