//! Error types.
//!
//! Only repository acquisition can fail a whole request. Per-file parse,
//! decode, and structured-data failures are contained at the file boundary
//! inside the walker and extractors, so they have no public error type.

use thiserror::Error;

/// Failure to materialize a working copy of a repository.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("repository URL is empty")]
    EmptyUrl,

    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),

    #[error("failed to run git (is it installed?): {0}")]
    GitUnavailable(std::io::Error),

    #[error("git clone of '{url}' failed: {stderr}")]
    CloneFailed { url: String, stderr: String },
}
