//! Configuration for the card transform.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CardError;

/// Default favicon lookup service, queried with `domain` and `sz` parameters.
pub const DEFAULT_FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Options recognized by the card transform.
///
/// Every field has a default, so callers only pass the overrides they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Exact link text that marks a link as a card.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Per-fetch deadline in milliseconds.
    #[serde(default = "default_timeout", rename = "timeout")]
    pub timeout_ms: u64,
    /// User agent sent with page requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whether fallback cards are written to the cache like fetched ones.
    #[serde(default = "default_cache_fallback")]
    pub cache_fallback: bool,
    /// Base URL of the favicon service used when a page declares no icon.
    #[serde(default = "default_favicon_service")]
    pub favicon_service: String,
}

fn default_delimiter() -> String {
    "$card".to_string()
}

fn default_timeout() -> u64 {
    15_000
}

fn default_user_agent() -> String {
    "pretty-link-card/0.1".to_string()
}

fn default_cache_fallback() -> bool {
    true
}

fn default_favicon_service() -> String {
    DEFAULT_FAVICON_SERVICE.to_string()
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            timeout_ms: default_timeout(),
            user_agent: default_user_agent(),
            cache_fallback: default_cache_fallback(),
            favicon_service: default_favicon_service(),
        }
    }
}

impl TransformOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges caller-supplied plugin options over the defaults.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CardError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| CardError::Config(e.to_string()))
    }

    /// Sets the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the fetch timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Keeps fallback cards out of the cache.
    #[must_use]
    pub fn without_fallback_caching(mut self) -> Self {
        self.cache_fallback = false;
        self
    }

    /// Sets the favicon service base URL.
    #[must_use]
    pub fn with_favicon_service(mut self, service: impl Into<String>) -> Self {
        self.favicon_service = service.into();
        self
    }

    /// Gets the fetch timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
