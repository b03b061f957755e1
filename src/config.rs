//! Tunables for the fetch, cache and search layers.

use std::num::NonZeroUsize;
use std::time::Duration;

/// How long a fetched document stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Maximum number of sections returned by a single search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Engine-wide configuration, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Entries older than this are treated as absent and refetched.
    pub cache_ttl: Duration,
    /// Number of distinct URLs kept before the least recently used is evicted.
    pub cache_capacity: NonZeroUsize,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
    pub user_agent: String,
    pub max_results: usize,
    /// Allowed edits per query-term character for fuzzy matching.
    pub fuzzy_ratio: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: NonZeroUsize::new(64).unwrap_or(NonZeroUsize::MIN),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("preact-docs-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            fuzzy_ratio: 0.2,
        }
    }
}

impl EngineConfig {
    /// Override the cache TTL (mostly useful in tests).
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
