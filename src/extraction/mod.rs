//! Extraction orchestration module

mod discover;
mod outcome;
mod pipeline;
mod report;

pub use discover::find_extractable_files;
pub use outcome::{BatchReport, ExtractionOutcome, ItemStatus, JobStatus};
pub use pipeline::{ExtractedFile, ExtractionJob, ExtractionPipeline, default_output_dir};
pub use report::{CancelToken, NullSink, ProgressSink};
