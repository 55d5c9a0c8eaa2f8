//! Cache implementations for rendered cards.

use async_trait::async_trait;
use dashmap::DashMap;

use super::protocols::CardCache;
use crate::errors::CacheError;

/// An in-process cache backed by a concurrent map.
///
/// Lives as long as the value itself; builds that want persistence across
/// runs plug in their own [`CardCache`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, String>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-populated with entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the number of cached cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of one entry without going through the async API.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl CardCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// A cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

#[async_trait]
impl CardCache for NoCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());

        tokio_test::block_on(async {
            cache.set("https://ex.com/", "<div></div>".to_string()).await.unwrap();
            assert_eq!(
                cache.get("https://ex.com/").await.unwrap().as_deref(),
                Some("<div></div>")
            );
            assert_eq!(cache.get("https://other.com/").await.unwrap(), None);
        });

        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_memory_cache_last_write_wins() {
        let cache = MemoryCache::with_entries([("k", "first")]);
        tokio_test::block_on(cache.set("k", "second".to_string())).unwrap();
        assert_eq!(cache.peek("k").as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_no_cache_never_hits() {
        let cache = NoCache;
        cache.set("k", "v".to_string()).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
