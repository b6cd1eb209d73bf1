//! Format dispatch for the lofty-backed tag writer

use crate::error::{RetagError, Result};
use crate::tagging::format::leading_id3v2_len;
use crate::tagging::traits::MetadataWriter;
use crate::tagging::{flac, mp3};
use crate::types::{AudioFormat, TagSet};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::trace;

/// Production writer using lofty for tag encoding
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyWriter;

impl LoftyWriter {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataWriter for LoftyWriter {
    fn write(&self, path: &Path, format: AudioFormat, tags: &TagSet) -> Result<()> {
        trace!("Writing {} tags to {}", format, path.display());
        match format {
            AudioFormat::Mp3 => mp3::write(path, tags),
            AudioFormat::Flac => flac::write(path, tags),
            AudioFormat::Unsupported => Err(RetagError::unsupported(path)),
        }
    }

    fn name(&self) -> &'static str {
        "lofty"
    }
}

/// Length of an ID3v1 tag
const ID3V1_LEN: u64 = 128;

/// Remove every ID3v2 tag stacked at the start of a file
///
/// Returns the number of bytes removed. Only the tag headers are read unless
/// there is something to remove; the remainder is then copied to a temporary
/// file beside the original and renamed over it.
pub(crate) fn strip_leading_id3v2(path: &Path) -> io::Result<u64> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    let offset = leading_id3v2_len(&mut file)?.min(len);
    if offset == 0 {
        return Ok(0);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;

    file.seek(SeekFrom::Start(offset))?;
    io::copy(&mut file, &mut temp)?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), file.metadata()?.permissions())?;
    drop(file);

    temp.persist(path).map_err(|e| e.error)?;
    Ok(offset)
}

/// Truncate a trailing ID3v1 tag
///
/// Returns whether one was present. Files without one are not modified.
pub(crate) fn strip_id3v1(path: &Path) -> io::Result<bool> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let len = file.metadata()?.len();
    if len < ID3V1_LEN {
        return Ok(false);
    }

    let mut marker = [0u8; 3];
    file.seek(SeekFrom::Start(len - ID3V1_LEN))?;
    file.read_exact(&mut marker)?;
    if &marker != b"TAG" {
        return Ok(false);
    }

    file.set_len(len - ID3V1_LEN)?;
    Ok(true)
}
