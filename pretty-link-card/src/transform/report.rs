//! Per-invocation summary of a card transform.

use serde::{Deserialize, Serialize};

/// Where a node's card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    /// Served from the cache without fetching.
    Cached,
    /// Fetched and rendered from the page's metadata.
    Fetched,
    /// Rendered from the URL alone after a failed fetch.
    Fallback,
}

/// The result of resolving one card link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The rendered fragment.
    pub html: String,
    /// Where the fragment came from.
    pub source: CardSource,
    /// Cache calls that failed while resolving.
    pub cache_errors: usize,
}

/// Counters for one transform invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    /// Paragraphs matching the card-link convention.
    pub eligible: usize,
    /// Eligible nodes left untouched because their URL was invalid.
    pub skipped_invalid: usize,
    /// Cards served from the cache.
    pub cache_hits: usize,
    /// Cards rendered from fetched pages.
    pub fetched: usize,
    /// Cards rendered from the URL alone.
    pub fallbacks: usize,
    /// Failed cache calls.
    pub cache_errors: usize,
}

impl TransformReport {
    /// Records the outcome of one resolved node.
    pub fn record(&mut self, resolution: &Resolution) {
        match resolution.source {
            CardSource::Cached => self.cache_hits += 1,
            CardSource::Fetched => self.fetched += 1,
            CardSource::Fallback => self.fallbacks += 1,
        }
        self.cache_errors += resolution.cache_errors;
    }

    /// Number of nodes rewritten into cards.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.cache_hits + self.fetched + self.fallbacks
    }
}
