//! Pipeline orchestration
//!
//! Drives discovery, name parsing, format detection and tag writing, one file
//! at a time. Per-file failures are recorded and the batch continues; only an
//! unusable root path aborts the run.
//!
//! Files are rewritten in place as they are reached. If a run is interrupted,
//! files already processed keep their new tags and the rest are untouched;
//! nothing is rolled back.

use crate::config::Settings;
use crate::discovery;
use crate::error::{RetagError, Result};
use crate::tagging::{filename, format, LoftyWriter, MetadataWriter};
use crate::types::{AudioFormat, RetagResult, RunSummary, TagSet};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run the full retag pipeline with the lofty writer
pub fn run(settings: &Settings) -> Result<RunSummary> {
    run_with_writer(settings, &LoftyWriter::new())
}

/// Run the pipeline with a caller-supplied writer backend
pub fn run_with_writer(settings: &Settings, writer: &dyn MetadataWriter) -> Result<RunSummary> {
    let start = Instant::now();

    // Phase 1: Discovery (fatal on a bad root)
    info!("Scanning {} for audio files...", settings.root.display());
    let files = discovery::scan(&settings.root, settings.recursive)?;

    if settings.dry_run {
        info!("Dry run: no files will be modified");
    }
    debug!("Using {} writer", writer.name());

    // Phase 2: Retag each file as it is discovered
    let mut summary = RunSummary::new(settings.dry_run);
    for path in files {
        let result = match retag_file(&path, writer, settings.dry_run) {
            Ok(tags) => {
                info!("{}", tags);
                RetagResult::success(path, tags)
            }
            Err(e) => {
                warn!("{}: {}", e.reason(), path.display());
                RetagResult::from_error(e)?
            }
        };
        summary.record(result);
    }

    if summary.examined == 0 {
        warn!("No .mp3 or .flac files found in {}", settings.root.display());
    }

    info!("Finished in {:.2}s", start.elapsed().as_secs_f64());

    Ok(summary)
}

/// Parse, detect and rewrite a single file
fn retag_file(path: &Path, writer: &dyn MetadataWriter, dry_run: bool) -> Result<TagSet> {
    debug!("Processing: {}", path.display());

    let tags = TagSet::from(filename::parse(path)?);

    let format = format::detect(path)?;
    if format == AudioFormat::Unsupported {
        return Err(RetagError::unsupported(path));
    }

    if dry_run {
        debug!("Would write {} tags: {}", format, tags);
    } else {
        writer.write(path, format, &tags)?;
    }

    Ok(tags)
}
