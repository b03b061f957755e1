//! Remote document retrieval through the URL cache.

use crate::cache::CacheStore;
use crate::config::EngineConfig;
use crate::error::{FetchCause, FetchError};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use std::sync::Arc;

/// Performs the actual network call. Implementations must not cache.
pub trait Transport: Send + Sync {
    /// Fetches the body of `url` as text. Non-success statuses are errors.
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchCause>>;
}

/// reqwest-backed transport used by the server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &EngineConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchCause> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchCause::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchCause::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchCause::Transport(e.to_string()))?;
        tracing::info!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

impl Transport for HttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchCause>> {
        self.get_text(url).boxed()
    }
}

/// Cache-aware fetcher. Fresh cache entries short-circuit the network; a
/// successful network call overwrites the entry. Failures leave the cache as
/// it was (no negative caching).
pub struct Fetcher {
    cache: CacheStore,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    pub fn new(cache: CacheStore, transport: Arc<dyn Transport>) -> Self {
        Self { cache, transport }
    }

    /// Builds a fetcher with an HTTP transport and an empty cache.
    pub fn from_config(config: &EngineConfig) -> reqwest::Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(
            CacheStore::new(config.cache_ttl, config.cache_capacity),
            Arc::new(transport),
        ))
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub async fn fetch_with_cache(&self, url: &str) -> Result<String, FetchError> {
        if let Some(text) = self.cache.get_fresh(url).await {
            return Ok(text);
        }

        match self.transport.get(url).await {
            Ok(text) => {
                self.cache.insert(url, text.clone()).await;
                Ok(text)
            }
            Err(cause) => {
                tracing::warn!("Failed to fetch {}: {}", url, cause);
                Err(FetchError::new(url, cause))
            }
        }
    }
}
