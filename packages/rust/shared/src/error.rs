//! Error types for Postpress.
//!
//! Library crates use [`PostpressError`] via `thiserror`. Per-file
//! conversion failures are contained at the file-processor boundary and
//! never surface through this type to batch callers; only configuration,
//! discovery, and worker-pool level failures do.

use std::path::PathBuf;

/// Top-level error type for all Postpress operations.
#[derive(Debug, thiserror::Error)]
pub enum PostpressError {
    /// Configuration validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// HTML-to-Markdown conversion error.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// A worker task failed at the pool level (e.g. a panicking worker).
    #[error("worker error: {0}")]
    Worker(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PostpressError>;

impl PostpressError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a worker error from any displayable message.
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }
}
