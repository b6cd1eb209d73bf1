//! Artist/title extraction from file names

use crate::error::{RetagError, Result};
use crate::types::ParsedName;
use std::path::Path;

/// Separator between artist and title in a file name
pub const DELIMITER: &str = " - ";

/// Parse `Artist - Title.ext` into its parts
///
/// Splits on the first delimiter only, so a title may itself contain " - ".
/// Both parts are trimmed and must be non-empty.
pub fn parse(path: &Path) -> Result<ParsedName> {
    let stem = path
        .file_stem()
        .ok_or_else(|| RetagError::parse(path, "No file name"))?
        .to_str()
        .ok_or_else(|| RetagError::parse(path, "File name is not valid UTF-8"))?;

    let (artist, title) = stem
        .split_once(DELIMITER)
        .ok_or_else(|| RetagError::parse(path, "No delimiter found"))?;

    let artist = artist.trim();
    let title = title.trim();

    if artist.is_empty() {
        return Err(RetagError::parse(path, "Empty artist in file name"));
    }
    if title.is_empty() {
        return Err(RetagError::parse(path, "Empty title in file name"));
    }

    Ok(ParsedName {
        artist: artist.to_string(),
        title: title.to_string(),
    })
}
