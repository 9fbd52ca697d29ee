//! Extraction pipeline: single-item and batch orchestration

use std::path::{Path, PathBuf};

use crate::bundle::{is_compressed_payload, output_name_for_payload, scan_resources};
use crate::compression::{DEFAULT_MAX_INFLATED_SIZE, inflate_raw_with_limit};
use crate::container::{ContainerOpener, NoContainerSupport};
use crate::error::{Error, Result};

use super::outcome::{BatchReport, ExtractionOutcome, ItemStatus, JobStatus};
use super::report::{CancelToken, ProgressSink};

/// Result of decoding one bundle entry, ready to write.
///
/// `data` is the exact inflate output; payload contents are never
/// interpreted further.
#[derive(Debug, Clone)]
pub struct ExtractedFile {
    /// Filename to write within the output directory.
    pub output_name: String,
    /// Decompressed payload bytes.
    pub data: Vec<u8>,
}

/// One user-initiated extraction: inputs, destination, cancellation.
///
/// Consumed by [`ExtractionPipeline::run`]; a new job is created per run.
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    /// Inputs in processing order.
    pub inputs: Vec<PathBuf>,
    /// Shared output directory. When `None`, a default is derived from the
    /// first input: `<its directory>/<its file stem>-decompressed`.
    pub output_dir: Option<PathBuf>,
    /// Cooperative cancellation token, polled between inputs.
    pub cancel: CancelToken,
}

impl ExtractionJob {
    /// Create a job over the given inputs with a fresh cancel token.
    #[must_use]
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output_dir: None,
            cancel: CancelToken::new(),
        }
    }

    /// Set an explicit output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Use an existing cancel token (shared with the caller).
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }
}

/// Orchestrates extraction: classification, decoding, writes, reporting.
///
/// Per-item work is sequential and synchronous; run the job on a worker
/// thread when a front end needs to observe progress or cancel.
pub struct ExtractionPipeline {
    opener: Box<dyn ContainerOpener + Sync + Send>,
    max_inflated_size: u64,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionPipeline {
    /// Pipeline without container support: standalone payloads only.
    #[must_use]
    pub fn new() -> Self {
        Self::with_opener(Box::new(NoContainerSupport))
    }

    /// Pipeline using the given opener for container inputs.
    #[must_use]
    pub fn with_opener(opener: Box<dyn ContainerOpener + Sync + Send>) -> Self {
        Self {
            opener,
            max_inflated_size: DEFAULT_MAX_INFLATED_SIZE,
        }
    }

    /// Override the decompressed-output ceiling applied to every payload.
    #[must_use]
    pub fn with_max_inflated_size(mut self, max_size: u64) -> Self {
        self.max_inflated_size = max_size;
        self
    }

    /// Single-item mode: decompress one payload to an explicit destination.
    ///
    /// No batching; only start/done are reported to the sink. Returns the
    /// number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the input cannot be read or the destination
    /// cannot be written, and [`Error::DecodeFailed`] /
    /// [`Error::DecodedTooLarge`] for bad payloads.
    pub fn extract_single(
        &self,
        input: &Path,
        dest: &Path,
        sink: &dyn ProgressSink,
    ) -> Result<u64> {
        sink.report("Extracting", 0.0);

        let compressed = std::fs::read(input)?;
        let data = inflate_raw_with_limit(&compressed, self.max_inflated_size)?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(dest, &data)?;

        sink.report("Completed", 1.0);
        sink.log(&format!(
            "Extracted {} ({} bytes)",
            dest.display(),
            data.len()
        ));
        Ok(data.len() as u64)
    }

    /// Batch mode: process every job input in order.
    ///
    /// Inputs are classified by shape: standalone `.compressed` payloads are
    /// inflated directly, container inputs go through the resource scanner,
    /// anything else is recorded as unsupported. A failing item is recorded
    /// in its [`ExtractionOutcome`] and never aborts the remaining items.
    /// The cancel token is checked before each input; on cancellation the
    /// report's status is [`JobStatus::Cancelled`] and files already written
    /// stay on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyJob`] for an empty input list and [`Error::Io`]
    /// when the output directory cannot be created. All other failures are
    /// per-item and land in the report.
    pub fn run(&self, job: &ExtractionJob, sink: &dyn ProgressSink) -> Result<BatchReport> {
        if job.inputs.is_empty() {
            return Err(Error::EmptyJob);
        }

        let output_dir = match &job.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(&job.inputs[0]),
        };
        std::fs::create_dir_all(&output_dir)?;

        let total = job.inputs.len();
        let mut report = BatchReport::new(output_dir.clone());

        for (index, input) in job.inputs.iter().enumerate() {
            if job.cancel.is_cancelled() {
                report.status = JobStatus::Cancelled;
                sink.report("Cancelled", index as f32 / total as f32);
                sink.log("Operation cancelled");
                break;
            }

            let display = input
                .file_name()
                .map_or_else(|| input.to_string_lossy().into_owned(), |n| {
                    n.to_string_lossy().into_owned()
                });
            sink.report(
                &format!("Processing {}/{}: {display}", index + 1, total),
                index as f32 / total as f32,
            );

            let status = match self.process_input(input, &output_dir) {
                Ok(Some(files_written)) => {
                    sink.log(&format!("Extracted: {display}"));
                    ItemStatus::Extracted { files_written }
                }
                Ok(None) => {
                    sink.log(&format!("Unsupported: {display}"));
                    ItemStatus::Unsupported
                }
                Err(e) => {
                    tracing::warn!(input = %input.display(), error = %e, "item failed");
                    sink.log(&format!("Failed {display}: {e}"));
                    ItemStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            report.record(ExtractionOutcome {
                source: input.clone(),
                status,
            });

            sink.report(
                &format!("Processed {}/{total}", index + 1),
                (index + 1) as f32 / total as f32,
            );
        }

        if report.status == JobStatus::Completed {
            sink.report("Completed", 1.0);
        }
        sink.log(&report.summary());
        Ok(report)
    }

    /// Process one batch input. `Ok(Some(n))` on success with `n` files
    /// written, `Ok(None)` for an unsupported shape.
    fn process_input(&self, input: &Path, output_dir: &Path) -> Result<Option<usize>> {
        let file_name = input
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::UnsupportedInput {
                path: input.to_path_buf(),
            })?;

        if is_compressed_payload(file_name) {
            let compressed = std::fs::read(input)?;
            let data = inflate_raw_with_limit(&compressed, self.max_inflated_size)?;
            let output_path = output_dir.join(output_name_for_payload(file_name));
            std::fs::write(&output_path, &data)?;
            return Ok(Some(1));
        }

        if self.opener.supports(input) {
            let container = self.opener.open(input)?;
            let resources = container.resources()?;
            let entries = scan_resources(&resources)?;

            let mut written = 0;
            for entry in &entries {
                let file = ExtractedFile {
                    output_name: entry.logical_name.clone(),
                    data: inflate_raw_with_limit(&entry.compressed, self.max_inflated_size)?,
                };
                // Re-running into the same directory overwrites without
                // warning; accepted behavior.
                std::fs::write(output_dir.join(&file.output_name), &file.data)?;
                tracing::debug!(name = %file.output_name, bytes = file.data.len(), "wrote bundle entry");
                written += 1;
            }
            return Ok(Some(written));
        }

        Ok(None)
    }
}

/// Default output directory: `<dir containing input>/<its file stem>-decompressed`.
#[must_use]
pub fn default_output_dir(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let stem = input
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    parent.join(format!("{stem}-decompressed"))
}
