//! Batch conversion of a downloaded newsletter archive to Markdown.
//!
//! The archive is a directory tree of `.html` posts (one subdirectory per
//! newsletter). [`batch_convert`] fans the files out across a bounded
//! worker pool; each file runs the extract → normalize → validate → write
//! pipeline in isolation, so one bad file never affects its siblings.
//!
//! This crate is a library surface for an embedding agent runtime: no CLI,
//! no network, no environment lookups.

mod discover;
mod pipeline;

pub use pipeline::{BatchConverter, BatchResult, batch_convert, process_file};
pub use postpress_shared::{BatchConfig, DEFAULT_MAX_WORKERS, PostpressError, Result};
pub use tokio_util::sync::CancellationToken;
