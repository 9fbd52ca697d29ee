//! Progress reporting and cooperative cancellation

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives status and log updates from a running extraction.
///
/// Implementations must not block: the pipeline treats delivery as
/// fire-and-forget. A GUI maps `report` onto a status line and progress bar
/// and `log` onto a log pane; the CLI maps them onto an `indicatif` bar.
pub trait ProgressSink: Sync + Send {
    /// Report the current status line and overall progress in `0.0..=1.0`.
    fn report(&self, status: &str, fraction: f32);

    /// Append a free-text log line.
    fn log(&self, line: &str);
}

/// A sink that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _status: &str, _fraction: f32) {}
    fn log(&self, _line: &str) {}
}

/// Cooperative cancellation flag shared between a job and its caller.
///
/// The pipeline polls the token at item boundaries only, never
/// mid-decompress, so cancellation latency is bounded by the current item.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; cannot be undone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
