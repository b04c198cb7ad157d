//! Error types for override fetching.

use thiserror::Error;

/// Result type for CMS operations.
pub type CmsResult<T> = Result<T, CmsError>;

/// Errors that can occur while fetching override documents.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}")]
    Api { status: u16 },

    #[error("malformed override document: {0}")]
    MalformedDocument(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CmsError {
    /// True for failures worth retrying (transport errors and 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            CmsError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            CmsError::Api { status } => *status >= 500,
            _ => false,
        }
    }
}
