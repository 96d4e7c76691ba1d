//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error reaching the API.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API reachable but returned a non-success status.
    ///
    /// The message carries only the status code; the query text is logged
    /// at debug level, not surfaced to the caller.
    #[error("Query failed with HTTP status {status}")]
    RemoteQuery {
        /// HTTP status code returned by the API.
        status: u16,
    },

    /// API returned a success status but an unparseable or unexpected body.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Token could not be used as an HTTP header value.
    #[error("Invalid credential: {0}")]
    InvalidToken(String),
}

impl FetchError {
    /// Returns true if another attempt might succeed.
    ///
    /// Transport, remote-query, and malformed-response failures all retry
    /// under the same policy. A token that cannot even form a header value
    /// will fail identically every time, so it does not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::InvalidToken(_))
    }
}
