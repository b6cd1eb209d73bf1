//! MP3 tag replacement
//!
//! Every tag container an MP3 can carry is removed: ID3v1 at the very end,
//! a Lyrics3 block in front of it, an APEv2 tag in front of that, and ID3v2
//! at the start. A single ID3v2.3 tag holding only TPE1 and TIT2 is then
//! written. No ID3v1 tag is written back.

use crate::error::{ErrorContext, RetagError, Result};
use crate::tagging::writer::{strip_id3v1, strip_leading_id3v2};
use crate::types::TagSet;
use lofty::config::WriteOptions;
use lofty::id3::v2::Id3v2Tag;
use lofty::prelude::*;
use lofty::tag::TagType;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

const LYRICS_BEGIN: &[u8] = b"LYRICSBEGIN";
const LYRICS3V1_END: &[u8] = b"LYRICSEND";
const LYRICS3V2_END: &[u8] = b"LYRICS200";

/// Lyrics3v2 stores its size as six ASCII digits just before the end marker
const LYRICS3V2_SIZE_LEN: u64 = 6;

/// Lyrics3v1 has no size field; its body is capped at this many bytes
const LYRICS3V1_MAX_LEN: u64 = 5100;

/// Replace all tags in an MP3 file with exactly `tags`
pub(crate) fn write(path: &Path, tags: &TagSet) -> Result<()> {
    // Trailing containers first, outermost to innermost. lofty's ID3v1
    // removal appends an empty tag when none exists, so it is cut by hand.
    if strip_id3v1(path).with_file_context(path)? {
        debug!("Removed ID3v1 tag from {}", path.display());
    }

    if strip_lyrics3(path).with_file_context(path)? {
        debug!("Removed Lyrics3 block from {}", path.display());
    }

    TagType::Ape
        .remove_from_path(path)
        .map_err(|e| RetagError::lofty_error(path, e))?;

    TagType::Id3v2
        .remove_from_path(path)
        .map_err(|e| RetagError::lofty_error(path, e))?;

    let leftover = strip_leading_id3v2(path).with_file_context(path)?;
    if leftover > 0 {
        debug!(
            "Removed {} bytes of stacked ID3v2 tags from {}",
            leftover,
            path.display()
        );
    }

    let mut tag = Id3v2Tag::new();
    tag.set_artist(tags.artist.clone());
    tag.set_title(tags.title.clone());

    tag.save_to_path(path, WriteOptions::new().use_id3v23(true))
        .map_err(|e| RetagError::lofty_error(path, e))?;

    Ok(())
}

/// Truncate a Lyrics3 (v1 or v2) block from the end of the file
///
/// Must run after ID3v1 removal, since Lyrics3 sits immediately before an
/// ID3v1 tag. Returns whether anything was removed.
pub(crate) fn strip_lyrics3(path: &Path) -> std::io::Result<bool> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let len = file.metadata()?.len();

    let Some(start) = find_lyrics3(&mut file, len)? else {
        return Ok(false);
    };

    file.set_len(start)?;
    Ok(true)
}

/// Offset of a Lyrics3 block ending at `len`, if one is present
fn find_lyrics3(file: &mut File, len: u64) -> std::io::Result<Option<u64>> {
    let marker_len = LYRICS3V2_END.len() as u64;
    if len < marker_len + LYRICS_BEGIN.len() as u64 {
        return Ok(None);
    }

    let mut marker = [0u8; 9];
    file.seek(SeekFrom::Start(len - marker_len))?;
    file.read_exact(&mut marker)?;

    if marker == LYRICS3V2_END {
        let size_start = match len.checked_sub(marker_len + LYRICS3V2_SIZE_LEN) {
            Some(start) => start,
            None => return Ok(None),
        };
        let mut digits = [0u8; LYRICS3V2_SIZE_LEN as usize];
        file.seek(SeekFrom::Start(size_start))?;
        file.read_exact(&mut digits)?;

        let Some(size) = std::str::from_utf8(&digits)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        else {
            return Ok(None);
        };
        let Some(start) = size_start.checked_sub(size) else {
            return Ok(None);
        };

        let mut begin = [0u8; 11];
        file.seek(SeekFrom::Start(start))?;
        file.read_exact(&mut begin)?;
        return Ok((begin == LYRICS_BEGIN).then_some(start));
    }

    if marker == LYRICS3V1_END {
        let window = (LYRICS3V1_MAX_LEN + LYRICS_BEGIN.len() as u64 + marker_len).min(len);
        let window_start = len - window;
        let mut tail = vec![0u8; window as usize];
        file.seek(SeekFrom::Start(window_start))?;
        file.read_exact(&mut tail)?;

        let begin = tail
            .windows(LYRICS_BEGIN.len())
            .rposition(|w| w == LYRICS_BEGIN);
        return Ok(begin.map(|pos| window_start + pos as u64));
    }

    Ok(None)
}
