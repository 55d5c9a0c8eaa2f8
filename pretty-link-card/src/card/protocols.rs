//! Protocol traits for card resolution components.
//!
//! These traits define the interfaces for fetching pages, caching rendered
//! cards, and observing resolution, allowing for pluggable implementations.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::errors::{CacheError, FetchError};

/// Protocol for retrieving page HTML.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    /// Fetches `url` and returns its body, aborting after `timeout`.
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, FetchError>;
}

/// Protocol for the rendered-card cache, keyed by normalized URL.
///
/// Implementations must tolerate concurrent uncoordinated calls for the same
/// key; last write wins.
#[async_trait]
pub trait CardCache: Send + Sync {
    /// Looks up a rendered card.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a rendered card.
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;
}

/// Observability callbacks for card resolution.
pub trait TransformObserver: Send + Sync {
    /// Called when a link target cannot be normalized.
    fn on_invalid_url(&self, raw: &str, reason: &str);

    /// Called when a card is served from the cache.
    fn on_cache_hit(&self, url: &str);

    /// Called when a page was fetched and rendered.
    fn on_fetch_complete(&self, url: &str, duration_ms: f64);

    /// Called when resolution degraded to a fallback card.
    fn on_fallback(&self, url: &str, error: &str);

    /// Called when the cache backend fails.
    fn on_cache_error(&self, url: &str, error: &str);
}

/// No-op implementation of TransformObserver.
#[derive(Debug, Clone, Default)]
pub struct NoOpTransformObserver;

impl TransformObserver for NoOpTransformObserver {
    fn on_invalid_url(&self, _raw: &str, _reason: &str) {}
    fn on_cache_hit(&self, _url: &str) {}
    fn on_fetch_complete(&self, _url: &str, _duration_ms: f64) {}
    fn on_fallback(&self, _url: &str, _error: &str) {}
    fn on_cache_error(&self, _url: &str, _error: &str) {}
}

/// An observer that logs resolution events using the tracing framework.
#[derive(Debug, Clone, Default)]
pub struct LoggingTransformObserver;

impl TransformObserver for LoggingTransformObserver {
    fn on_invalid_url(&self, raw: &str, reason: &str) {
        tracing::debug!(url = %raw, reason = %reason, "Skipping card link with invalid URL");
    }

    fn on_cache_hit(&self, url: &str) {
        tracing::debug!(url = %url, "Link card served from cache");
    }

    fn on_fetch_complete(&self, url: &str, duration_ms: f64) {
        tracing::debug!(url = %url, duration_ms, "Link card fetched");
    }

    fn on_fallback(&self, url: &str, error: &str) {
        tracing::warn!(url = %url, error = %error, "Link card degraded to fallback");
    }

    fn on_cache_error(&self, url: &str, error: &str) {
        tracing::warn!(url = %url, error = %error, "Link card cache error");
    }
}
