//! Error types for case store operations
//!
//! A skipped write is not an error (see `WriteOutcome::Skipped`); everything
//! in this enum is a real failure the caller has to look at.

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for case store operations
pub type CaseStoreResult<T> = Result<T, CaseStoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CaseStoreError {
    /// URL could not be parsed or has no host to derive a directory from
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// URL remainder or case name would escape the case directory
    #[error("Unsafe path component '{component}' in {context}")]
    UnsafePath { component: String, context: String },

    /// Filesystem failure while creating directories, writing or reading
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be moved onto the case file path
    #[error("Failed to persist case file {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blocking task panicked or was cancelled
    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Blocking task did not finish in time
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl CaseStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaseStoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures that come from the filesystem itself
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, CaseStoreError::Io { .. } | CaseStoreError::Persist { .. })
    }
}
