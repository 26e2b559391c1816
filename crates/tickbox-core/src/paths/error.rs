//! Failure modes of data-directory resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or preparing data directories.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform reports no usable data directory.
    #[error("No platform data directory available")]
    DataDirUnavailable,

    /// A required directory could not be created.
    #[error("Could not create {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },
}
