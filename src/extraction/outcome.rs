//! Per-item outcomes and batch summaries

use std::path::PathBuf;

use serde::Serialize;

/// How one batch input was handled.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    /// Input processed successfully.
    Extracted {
        /// Number of files written for this input.
        files_written: usize,
    },
    /// Input shape not recognized; skipped without failing the batch.
    Unsupported,
    /// Input failed; the batch continued with the remaining items.
    Failed {
        /// The error message recorded at the item boundary.
        error: String,
    },
}

/// Result of processing one batch input.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    /// The input this outcome describes.
    pub source: PathBuf,
    pub status: ItemStatus,
}

impl ExtractionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, ItemStatus::Extracted { .. })
    }
}

/// Final status of an extraction job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Every input was processed (some may still have failed individually).
    Completed,
    /// Cancellation was observed; remaining inputs were not processed.
    Cancelled,
}

/// Summary of a batch extraction job.
///
/// Already-written files are never rolled back: a cancelled or partially
/// failed job leaves its completed outputs on disk.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Final job status.
    pub status: JobStatus,
    /// Directory the job wrote into.
    pub output_dir: PathBuf,
    /// Per-item outcomes, in input order. Under cancellation this holds
    /// only the items processed before the token was observed.
    pub outcomes: Vec<ExtractionOutcome>,
    /// Number of inputs processed successfully.
    pub success_count: usize,
    /// Number of inputs that failed.
    pub fail_count: usize,
    /// Number of inputs skipped as unsupported.
    pub skip_count: usize,
    /// Total number of files written across all inputs.
    pub files_written: usize,
}

impl BatchReport {
    pub(crate) fn new(output_dir: PathBuf) -> Self {
        Self {
            status: JobStatus::Completed,
            output_dir,
            outcomes: Vec::new(),
            success_count: 0,
            fail_count: 0,
            skip_count: 0,
            files_written: 0,
        }
    }

    pub(crate) fn record(&mut self, outcome: ExtractionOutcome) {
        match &outcome.status {
            ItemStatus::Extracted { files_written } => {
                self.success_count += 1;
                self.files_written += files_written;
            }
            ItemStatus::Unsupported => self.skip_count += 1,
            ItemStatus::Failed { .. } => self.fail_count += 1,
        }
        self.outcomes.push(outcome);
    }

    /// One-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} succeeded, {} failed, {} skipped, {} file(s) written to {}",
            match self.status {
                JobStatus::Completed => "Completed",
                JobStatus::Cancelled => "Cancelled",
            },
            self.success_count,
            self.fail_count,
            self.skip_count,
            self.files_written,
            self.output_dir.display()
        )
    }
}
