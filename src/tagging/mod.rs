//! Filename parsing, container detection and tag rewriting
//!
//! The trait abstraction allows swapping the writer backend without changing
//! pipeline code.

pub mod filename;
mod flac;
pub mod format;
mod mp3;
pub mod traits;
pub mod writer;

pub use traits::MetadataWriter;
pub use writer::LoftyWriter;
