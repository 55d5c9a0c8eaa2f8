//! Error types for link card resolution.
//!
//! Every error here is contained at the per-node boundary of the transformer:
//! an invalid URL leaves its node untouched, a fetch failure degrades to a
//! fallback card, and a cache failure is logged. None of them reach the caller
//! of [`crate::transform::LinkCardTransformer::transform`].

use std::time::Duration;
use thiserror::Error;

/// The main error type for link card operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// A link target could not be normalized to an absolute URL.
    #[error("Invalid URL '{raw}': {reason}")]
    InvalidUrl {
        /// The raw link target.
        raw: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Fetching the target page failed.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// The cache backend failed.
    #[error("{0}")]
    Cache(#[from] CacheError),

    /// Transform options could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input could not be read as a document tree.
    #[error("Malformed document tree: {0}")]
    MalformedTree(String),
}

impl CardError {
    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// A failed attempt to fetch a page's HTML.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Network(String),

    /// The request did not complete before the deadline and was aborted.
    #[error("Request timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// The deadline that expired.
        timeout: Duration,
    },
}

impl FetchError {
    /// Creates a status error.
    #[must_use]
    pub fn status_code(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout { timeout }
    }

    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// A failure reported by a cache backend.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// The backend could not serve the request.
    #[error("Cache backend error: {0}")]
    Backend(String),
}

impl CacheError {
    /// Creates a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = CardError::invalid_url("http://[::1", "invalid IPv6 address");
        assert_eq!(
            err.to_string(),
            "Invalid URL 'http://[::1': invalid IPv6 address"
        );
    }

    #[test]
    fn test_fetch_error_status() {
        assert_eq!(FetchError::status_code(404).status(), Some(404));
        assert_eq!(FetchError::network("refused").status(), None);
        assert_eq!(
            FetchError::timeout(Duration::from_millis(250)).to_string(),
            "Request timed out after 250ms"
        );
    }

    #[test]
    fn test_fetch_error_converts() {
        let err = CardError::from(FetchError::status_code(503));
        assert!(matches!(err, CardError::Fetch(FetchError::Status { status: 503 })));
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_cache_error_converts() {
        let err: CardError = CacheError::backend("disk full").into();
        assert!(matches!(err, CardError::Cache(_)));
        assert_eq!(err.to_string(), "Cache backend error: disk full");
    }
}
