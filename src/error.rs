//! Error types for `decostura`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `decostura` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Bundle Errors ====================
    /// The container holds no resources matching the bundle naming grammar.
    ///
    /// Reportable and non-fatal: the input simply is not a Costura bundle.
    #[error("no Costura resources found")]
    NoBundleFound,

    /// A decoded logical name is empty or would escape the output directory.
    #[error("invalid logical name: {name:?}")]
    InvalidLogicalName {
        /// The offending logical name.
        name: String,
    },

    // ==================== Decompression Errors ====================
    /// The compressed payload is truncated or contains invalid DEFLATE data.
    #[error("DEFLATE decompression failed: {message}")]
    DecodeFailed {
        /// The error message from the inflater.
        message: String,
    },

    /// The decompressed output exceeded the configured size ceiling.
    #[error("decompressed output exceeds size limit of {limit} bytes")]
    DecodedTooLarge {
        /// The size ceiling that was exceeded, in bytes.
        limit: u64,
    },

    // ==================== Job Errors ====================
    /// The input shape is not recognized (not a payload, not a known container).
    #[error("unsupported input: {path}")]
    UnsupportedInput {
        /// Path of the unsupported input.
        path: PathBuf,
    },

    /// An extraction job was submitted with an empty input list.
    #[error("extraction job has no inputs")]
    EmptyJob,

    /// Cooperative cancellation was observed at an item boundary.
    #[error("operation cancelled")]
    Cancelled,
}

/// A specialized Result type for `decostura` operations.
pub type Result<T> = std::result::Result<T, Error>;
