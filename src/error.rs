//! Error types for documentation retrieval.
//!
//! Only two failures are hard errors: an unknown repository name and a failed
//! fetch. Malformed documentation text is never an error, it just produces
//! fewer (or no) sections.

use thiserror::Error;

/// A specialized Result type for documentation operations.
pub type Result<T, E = DocsError> = std::result::Result<T, E>;

/// The requested repository is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Repository '{repository}' not found")]
pub struct NotFoundError {
    pub repository: String,
}

/// Why a fetch did not produce any text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
    /// The request never completed (DNS, TLS, connection reset, body decode...).
    #[error("{0}")]
    Transport(String),
}

/// A network or HTTP failure while fetching `url`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: FetchCause) -> Self {
        Self {
            url: url.into(),
            cause,
        }
    }
}

/// Errors surfaced by the top-level retrieval operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocsError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
