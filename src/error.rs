//! Error types for moddelta
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//! Per-file failures during a run are not errors in this sense - they are
//! logged by the worker that hit them and counted in the run summary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for moddelta operations
pub type DeltaResult<T> = Result<T, DeltaError>;

/// Main error type for moddelta operations
#[derive(Error, Debug)]
pub enum DeltaError {
    /// A required input tree is missing; the run aborts before any copy
    #[error("input tree not found: {path}")]
    MissingTree { path: PathBuf },

    /// Configuration file exists but does not parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
