//! retag - Rewrite audio tags from file names
//!
//! A command-line utility that walks a directory of MP3 and FLAC files,
//! deletes every existing tag, comment and embedded picture, and writes back
//! only Artist and Title taken from file names of the form
//! `Artist - Title.ext`.
//!
//! # Architecture
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: Lazy file scanning
//! - `tagging`: Name parsing, container sniffing and tag writing (lofty)
//! - `pipeline`: Sequential orchestration with per-file failure isolation
//!
//! # Example
//!
//! ```no_run
//! use retag::{config::Settings, pipeline};
//!
//! let settings = Settings::default();
//! let summary = pipeline::run(&settings).expect("Root directory is invalid");
//! println!("{}", summary);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod tagging;
pub mod types;

// Re-export key types at crate root
pub use error::{RetagError, Result};
pub use types::{AudioFormat, ParsedName, RetagOutcome, RetagResult, RunSummary, TagSet};
