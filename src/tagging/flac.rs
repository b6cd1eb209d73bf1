//! FLAC tag replacement
//!
//! Writes a fresh Vorbis comment block holding only ARTIST and TITLE. lofty
//! drops every existing VORBIS_COMMENT and PICTURE block when it writes, so
//! old fields and embedded art go in the same pass. Non-standard ID3 tags
//! glued to either end of the stream are removed first.

use crate::error::{ErrorContext, RetagError, Result};
use crate::tagging::writer::{strip_id3v1, strip_leading_id3v2};
use crate::types::TagSet;
use lofty::config::WriteOptions;
use lofty::ogg::VorbisComments;
use lofty::prelude::*;
use std::path::Path;
use tracing::debug;

/// Replace all tags and pictures in a FLAC file with exactly `tags`
pub(crate) fn write(path: &Path, tags: &TagSet) -> Result<()> {
    let stripped = strip_leading_id3v2(path).with_file_context(path)?;
    if stripped > 0 {
        debug!(
            "Removed {} bytes of ID3v2 from FLAC {}",
            stripped,
            path.display()
        );
    }

    if strip_id3v1(path).with_file_context(path)? {
        debug!("Removed ID3v1 tag from FLAC {}", path.display());
    }

    let mut comments = VorbisComments::default();
    comments.set_artist(tags.artist.clone());
    comments.set_title(tags.title.clone());

    comments
        .save_to_path(path, WriteOptions::default())
        .map_err(|e| RetagError::lofty_error(path, e))?;

    Ok(())
}
