//! # decostura
//!
//! A pure-Rust library for extracting Costura-embedded resources from host
//! binaries. Costura (Fody) packs referenced assemblies into a host as
//! embedded resources named `costura.<name>.compressed`, each a raw-DEFLATE
//! stream; this crate reverses that packaging.
//!
//! ## What it does
//!
//! - **Name decoding** - parse the bundle naming grammar and recover the
//!   original filename of each payload
//! - **Payload decompression** - bounded raw-DEFLATE inflation
//! - **Batch extraction** - process many inputs with per-item failure
//!   isolation, progress reporting, and cooperative cancellation
//!
//! ## Quick Start
//!
//! ```no_run
//! use decostura::prelude::*;
//!
//! // Decompress one standalone payload
//! let pipeline = ExtractionPipeline::new();
//! pipeline.extract_single(
//!     "mylib.dll.compressed".as_ref(),
//!     "mylib.dll".as_ref(),
//!     &NullSink,
//! )?;
//!
//! // Batch-extract a set of inputs
//! let job = ExtractionJob::new(vec!["payloads/a.dll.compressed".into()])
//!     .with_output_dir("out/");
//! let report = pipeline.run(&job, &NullSink)?;
//! println!("{}", report.summary());
//! # Ok::<(), decostura::Error>(())
//! ```
//!
//! ## Container inputs
//!
//! Listing the embedded resources of a host binary is a capability boundary:
//! implement [`container::ResourceContainer`] and [`container::ContainerOpener`]
//! over any metadata reader and pass the opener to
//! [`ExtractionPipeline::with_opener`](extraction::ExtractionPipeline::with_opener).
//! [`container::MemoryContainer`] serves in-process callers and tests.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `decostura` command-line binary

pub mod bundle;
pub mod compression;
pub mod container;
pub mod error;
pub mod extraction;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::bundle::{BundleEntry, decode_resource_name, scan_resources};
    pub use crate::compression::{inflate_raw, inflate_raw_with_limit};
    pub use crate::container::{
        ContainerOpener, MemoryContainer, RawResource, ResourceContainer,
    };
    pub use crate::error::{Error, Result};
    pub use crate::extraction::{
        BatchReport, CancelToken, ExtractedFile, ExtractionJob, ExtractionOutcome,
        ExtractionPipeline, ItemStatus, JobStatus, NullSink, ProgressSink,
        find_extractable_files,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
