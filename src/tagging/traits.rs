//! Tag writer trait abstraction
//!
//! The pipeline only talks to this trait, so the codec backend can be
//! swapped (or faked in tests) without touching orchestration code.

use crate::error::Result;
use crate::types::{AudioFormat, TagSet};
use std::path::Path;

/// Destructive tag replacement backend
pub trait MetadataWriter {
    /// Replace all metadata in `path` with exactly `tags`
    ///
    /// The file is rewritten in place. There is no backup: an error partway
    /// through may leave the file with some old tags already removed.
    fn write(&self, path: &Path, format: AudioFormat, tags: &TagSet) -> Result<()>;

    /// Get the name of this writer (for logging)
    fn name(&self) -> &'static str;
}
