//! Store error types.

use thiserror::Error;

/// Errors that can occur while persisting a record.
///
/// Persistence failures are never retried; they propagate immediately.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error writing or renaming the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
