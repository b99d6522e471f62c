//! Batch-conversion configuration.
//!
//! There is deliberately no config file, CLI surface, or environment
//! lookup here: the embedding application (an agent runtime) passes a
//! [`BatchConfig`] in directly.

use serde::{Deserialize, Serialize};

use crate::error::{PostpressError, Result};

/// Default size of the conversion worker pool.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Configuration for a batch conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of files converted concurrently.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

impl BatchConfig {
    /// Validate the configuration before a batch run starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(PostpressError::config("max_workers must be at least 1"));
        }
        Ok(())
    }
}
