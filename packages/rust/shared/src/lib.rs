//! Shared error model and configuration for Postpress.
//!
//! Foundation crate depended on by the conversion crates. It provides:
//! - [`PostpressError`], the unified error type
//! - [`BatchConfig`], worker-pool configuration for batch conversion

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{BatchConfig, DEFAULT_MAX_WORKERS};
pub use error::{PostpressError, Result};
