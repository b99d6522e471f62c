//! Per-file conversion and the bounded batch converter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use postpress_markdown as markdown;
use postpress_shared::{BatchConfig, PostpressError, Result};

use crate::discover::discover_html_files;

/// Summary of a completed batch conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of `.html` files discovered under the input root.
    pub files_found: usize,
    /// Number of files successfully converted and written.
    pub files_converted: usize,
}

/// Outcome of converting a single file.
enum FileOutcome {
    /// Markdown written to the sibling `.md` path.
    Converted(PathBuf),
    /// The extractor found no main content; nothing was written.
    NoContent,
}

/// Convert one downloaded post; `true` means the sibling `.md` file was
/// written.
///
/// This is the failure boundary of the pipeline: unreadable input, encoding
/// errors, extraction or conversion failures, and write failures are all
/// logged with the offending path and turned into `false`, so sibling files
/// are never affected. A post without extractable main content is a skip,
/// logged as a warning rather than an error.
pub fn process_file(path: &Path) -> bool {
    match convert_file(path) {
        Ok(FileOutcome::Converted(output)) => {
            debug!(input = %path.display(), output = %output.display(), "converted");
            true
        }
        Ok(FileOutcome::NoContent) => {
            warn!(input = %path.display(), "no extractable content, skipping");
            false
        }
        Err(e) => {
            error!(input = %path.display(), error = %e, "conversion failed");
            false
        }
    }
}

fn convert_file(path: &Path) -> Result<FileOutcome> {
    let html = std::fs::read_to_string(path).map_err(|e| PostpressError::io(path, e))?;

    let Some(extracted) = markdown::extract(&html)? else {
        return Ok(FileOutcome::NoContent);
    };

    let normalized = markdown::normalize(&extracted);

    // Advisory only: issues are logged and the file is still written.
    let report = markdown::validate(&normalized);
    if !report.valid {
        warn!(
            input = %path.display(),
            issues = %report.issues.join(", "),
            "validation issues"
        );
    }

    let output = path.with_extension("md");
    std::fs::write(&output, &normalized).map_err(|e| PostpressError::io(&output, e))?;

    Ok(FileOutcome::Converted(output))
}

// ---------------------------------------------------------------------------
// Batch converter
// ---------------------------------------------------------------------------

/// Bounded-concurrency converter over a directory tree of downloaded posts.
///
/// Workers share no mutable state: every input maps to a distinct sibling
/// output path, so worker count affects timing only, never output contents.
pub struct BatchConverter {
    config: BatchConfig,
    cancel: CancellationToken,
}

impl BatchConverter {
    /// Create a converter with the given configuration.
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancellationToken::new(),
        })
    }

    /// Token callers can trigger to stop the batch early. Once cancelled,
    /// no new file begins processing; in-flight workers finish normally.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Convert every `.html` file under `input_dir` and return the counts.
    ///
    /// This call is a synchronization barrier: it returns only after every
    /// dispatched worker has completed, even when the batch ultimately
    /// fails. Per-file failures are contained by [`process_file`]; only
    /// discovery errors and task-level failures (a panicking worker) fail
    /// the whole batch.
    #[instrument(
        skip(self),
        fields(input_dir = %input_dir.display(), max_workers = self.config.max_workers)
    )]
    pub async fn run(&self, input_dir: &Path) -> Result<BatchResult> {
        let files = discover_html_files(input_dir)?;
        info!(count = files.len(), "found HTML files");

        let semaphore = Arc::new(Semaphore::new(self.config.max_workers));
        let mut handles = Vec::with_capacity(files.len());

        for path in &files {
            let sem = Arc::clone(&semaphore);
            let cancel = self.cancel.clone();
            let path = path.clone();

            handles.push(tokio::spawn(async move {
                let _permit = sem.acquire_owned().await.expect("semaphore closed");
                if cancel.is_cancelled() {
                    debug!(input = %path.display(), "cancelled before start");
                    return Ok(false);
                }
                tokio::task::spawn_blocking(move || process_file(&path)).await
            }));
        }

        let mut converted = 0usize;
        let mut worker_error: Option<PostpressError> = None;

        for handle in handles {
            match handle.await {
                Ok(Ok(true)) => converted += 1,
                Ok(Ok(false)) => {}
                Ok(Err(e)) | Err(e) => {
                    // Keep awaiting the remaining workers before failing.
                    if worker_error.is_none() {
                        worker_error = Some(PostpressError::worker(e.to_string()));
                    }
                }
            }
        }

        if let Some(e) = worker_error {
            return Err(e);
        }

        info!(
            converted,
            found = files.len(),
            "batch conversion complete"
        );

        Ok(BatchResult {
            files_found: files.len(),
            files_converted: converted,
        })
    }
}

/// Convert every `.html` file under `input_dir` with a pool of
/// `max_workers`. Primary entry point for embedding callers.
pub async fn batch_convert(
    input_dir: impl AsRef<Path>,
    max_workers: usize,
) -> Result<BatchResult> {
    let converter = BatchConverter::new(BatchConfig { max_workers })?;
    converter.run(input_dir.as_ref()).await
}
