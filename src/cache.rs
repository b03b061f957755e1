//! Short-lived in-memory cache of fetched documents, keyed by URL.
//!
//! An entry is served only while `now - fetched_at < ttl`. Stale entries stay
//! in the map until they are overwritten by a successful refetch, but they are
//! never returned. Capacity is bounded by an LRU so a long-running server does
//! not accumulate every URL it was ever asked for.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Last fetched text for a URL.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub text: String,
    pub fetched_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// Process-wide URL → text cache shared by every repository.
pub struct CacheStore {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl CacheStore {
    pub fn new(ttl: Duration, capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Returns the cached text if the entry exists and is still fresh.
    pub async fn get_fresh(&self, url: &str) -> Option<String> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        match entries.get(url) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                tracing::debug!("Cache hit for {}", url);
                Some(entry.text.clone())
            }
            Some(_) => {
                tracing::debug!("Cache entry for {} is stale", url);
                None
            }
            None => {
                tracing::debug!("Cache miss for {}", url);
                None
            }
        }
    }

    /// Stores `text` for `url`, stamped with the current instant.
    /// Last writer wins.
    pub async fn insert(&self, url: &str, text: String) {
        let entry = CacheEntry {
            text,
            fetched_at: Instant::now(),
        };
        self.entries.lock().await.put(url.to_string(), entry);
    }

    pub async fn is_fresh(&self, url: &str) -> bool {
        let now = Instant::now();
        self.entries
            .lock()
            .await
            .peek(url)
            .is_some_and(|entry| entry.is_fresh(now, self.ttl))
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
