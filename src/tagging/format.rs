//! Container detection
//!
//! The format is taken from the file's bytes, never from its name alone. A
//! file whose content disagrees with its extension is treated as unsupported.

use crate::error::{ErrorContext, Result};
use crate::types::AudioFormat;
use lofty::file::FileType;
use lofty::probe::Probe;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Size of an ID3v2 header (and footer)
const ID3V2_HEADER_LEN: usize = 10;

/// Stacked ID3v2 tags beyond this count are treated as garbage
const MAX_LEADING_ID3V2_TAGS: usize = 8;

/// Total length of the ID3v2 tag at the start of `header`, if there is one
///
/// Includes the 10-byte header and, when flagged, the 10-byte footer.
pub(crate) fn id3v2_tag_len(header: &[u8]) -> Option<u64> {
    if header.len() < ID3V2_HEADER_LEN || &header[..3] != b"ID3" {
        return None;
    }
    // Version bytes are never 0xFF and the size is synchsafe
    if header[3] == 0xFF || header[4] == 0xFF || header[6..10].iter().any(|b| b & 0x80 != 0) {
        return None;
    }

    let size = header[6..10]
        .iter()
        .fold(0u64, |acc, b| (acc << 7) | u64::from(*b));
    let footer = if header[5] & 0x10 != 0 {
        ID3V2_HEADER_LEN as u64
    } else {
        0
    };

    Some(ID3V2_HEADER_LEN as u64 + size + footer)
}

/// Combined length of the ID3v2 tags stacked at the start of a stream
///
/// Only the 10-byte headers are read. Both detection and the leading-tag
/// stripper walk the stack through here, so they always agree on where the
/// audio starts.
pub(crate) fn leading_id3v2_len<R: Read + Seek>(reader: &mut R) -> std::io::Result<u64> {
    let mut offset = 0u64;
    let mut header = Vec::with_capacity(ID3V2_HEADER_LEN);

    for _ in 0..MAX_LEADING_ID3V2_TAGS {
        reader.seek(SeekFrom::Start(offset))?;
        header.clear();
        reader
            .by_ref()
            .take(ID3V2_HEADER_LEN as u64)
            .read_to_end(&mut header)?;

        let Some(len) = id3v2_tag_len(&header) else {
            break;
        };
        offset += len;
    }

    Ok(offset)
}

/// Map lofty's content guess onto the formats this tool writes
fn from_file_type(file_type: Option<FileType>) -> AudioFormat {
    match file_type {
        Some(FileType::Mpeg) => AudioFormat::Mp3,
        Some(FileType::Flac) => AudioFormat::Flac,
        _ => AudioFormat::Unsupported,
    }
}

/// Identify the container from a stream's content
///
/// Stacked ID3v2 tags are skipped before lofty looks at the stream, since
/// lofty only skips the first one. No extension hint is given, so the result
/// depends on the bytes alone.
pub fn sniff<R: Read + Seek>(mut reader: R) -> std::io::Result<AudioFormat> {
    let skip = leading_id3v2_len(&mut reader)?;
    reader.seek(SeekFrom::Start(skip))?;

    let probe = Probe::new(reader).guess_file_type()?;
    Ok(from_file_type(probe.file_type()))
}

/// Determine a file's format from its content, cross-checked with its extension
pub fn detect(path: &Path) -> Result<AudioFormat> {
    let file = File::open(path).with_file_context(path)?;
    let sniffed = sniff(BufReader::new(file)).with_file_context(path)?;

    let expected = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(AudioFormat::from_extension);

    let format = match (expected, sniffed) {
        (Some(expected), sniffed) if expected == sniffed => sniffed,
        _ => AudioFormat::Unsupported,
    };

    debug!(
        "Detected {} for {} (content: {})",
        format,
        path.display(),
        sniffed
    );

    Ok(format)
}
