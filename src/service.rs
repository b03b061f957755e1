//! Top-level retrieval operations consumed by the protocol layer.

use crate::cache::CacheStore;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::fetch::{Fetcher, Transport};
use crate::parser;
use crate::registry::{Registry, Repository};
use crate::search::DocsIndex;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Separator placed between the blocks of a combined query response.
const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Owns the registry, the cached fetcher and the search index for the
/// lifetime of the process.
pub struct DocsService {
    registry: Registry,
    fetcher: Fetcher,
    index: Mutex<DocsIndex>,
}

impl std::fmt::Debug for DocsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsService")
            .field("repositories", &self.registry.all().len())
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

impl DocsService {
    pub fn new(registry: Registry, fetcher: Fetcher, config: &EngineConfig) -> Self {
        Self {
            registry,
            fetcher,
            index: Mutex::new(DocsIndex::new(config)),
        }
    }

    /// Builtin registry over HTTP.
    pub fn from_config(config: &EngineConfig) -> reqwest::Result<Self> {
        Ok(Self::new(
            Registry::builtin(),
            Fetcher::from_config(config)?,
            config,
        ))
    }

    /// Custom registry and transport, with a fresh cache sized from `config`.
    pub fn with_transport(
        registry: Registry,
        transport: Arc<dyn Transport>,
        config: &EngineConfig,
    ) -> Self {
        let cache = CacheStore::new(config.cache_ttl, config.cache_capacity);
        Self::new(registry, Fetcher::new(cache, transport), config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// README text for `repository`, under a `# {name} README` header.
    pub async fn get_readme(&self, repository: &str) -> Result<String> {
        let repo = self.registry.resolve(repository)?;
        let content = self.fetcher.fetch_with_cache(&repo.readme_url).await?;
        Ok(format!("# {} README\n\n{}", repo.name, content))
    }

    /// Searches `repository`'s docs feed (if it has one) and, for every
    /// repository but the primary one, appends the raw README.
    ///
    /// Fetch failures become inline blocks; only an unknown repository name
    /// fails the whole call.
    pub async fn query_docs(
        &self,
        query: &str,
        repository: &str,
        include_examples: bool,
    ) -> Result<String> {
        let repo = self.registry.resolve(repository)?;
        let mut blocks = Vec::new();

        if let Some(docs_url) = &repo.docs_url {
            match self.fetcher.fetch_with_cache(docs_url).await {
                Ok(text) => {
                    let matches = self.search_feed(&text, query, repo, include_examples).await;
                    if !matches.is_empty() {
                        blocks.push(format!(
                            "## {} Documentation Results:\n{}",
                            repo.name, matches
                        ));
                    }
                }
                Err(e) => {
                    blocks.push(format!(
                        "## {} Documentation: Unable to fetch ({})",
                        repo.name, e
                    ));
                }
            }
        }

        if !repo.is_primary() {
            match self.fetcher.fetch_with_cache(&repo.readme_url).await {
                Ok(readme) => blocks.push(format!("## {} README Results:\n{}", repo.name, readme)),
                Err(e) => blocks.push(format!("## {}: Error - {}", repo.name, e)),
            }
        }

        if blocks.is_empty() {
            return Ok(format!("No results found for query: \"{}\"", query));
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    /// Parses the feed, swaps it in as `repo`'s index generation and searches
    /// it. The index lock is held across both steps so a concurrent query on
    /// the same repository cannot observe a half-built generation.
    async fn search_feed(
        &self,
        text: &str,
        query: &str,
        repo: &Repository,
        include_examples: bool,
    ) -> String {
        let sections = parser::parse(text, &repo.name);
        let mut index = self.index.lock().await;
        index.reindex(&repo.name, sections);
        index.search(query, &repo.name, include_examples)
    }
}
