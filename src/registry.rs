//! Static registry of the Preact ecosystem repositories that can be queried.

use crate::error::NotFoundError;
use serde::Serialize;

/// Repository whose docs feed is the canonical one. Queries against it skip
/// the README block since the feed already covers the same material.
pub const PRIMARY_REPOSITORY: &str = "preact";

const PREACT_LLMS_TXT: &str = "https://preactjs.com/llms.txt";

/// A queryable repository: where its README lives and, optionally, a docs feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub description: String,
    pub readme_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl Repository {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        readme_url: impl Into<String>,
        docs_url: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            readme_url: readme_url.into(),
            docs_url: docs_url.map(str::to_string),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_REPOSITORY
    }
}

/// Ordered list of known repositories. Names are the only valid `repository`
/// arguments for the retrieval operations.
#[derive(Debug, Clone)]
pub struct Registry {
    repositories: Vec<Repository>,
}

impl Registry {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }

    /// The compiled-in Preact ecosystem table.
    pub fn builtin() -> Self {
        let raw = |path: &str| format!("https://raw.githubusercontent.com/{path}/README.md");
        Self::new(vec![
            Repository::new(
                "preact",
                "The README for the core Preact library",
                raw("preactjs/preact/main"),
                Some(PREACT_LLMS_TXT),
            ),
            Repository::new(
                "preact-iso",
                "The README for the Preact ISO library",
                raw("preactjs/preact-iso/main"),
                None,
            ),
            Repository::new(
                "@preact/signals-core",
                "The README for the core Signals library",
                raw("preactjs/signals/main/packages/core"),
                Some(PREACT_LLMS_TXT),
            ),
            Repository::new(
                "@preact/signals",
                "The README for the Preact Signals bindings for Preact",
                raw("preactjs/signals/main/packages/preact"),
                Some(PREACT_LLMS_TXT),
            ),
            Repository::new(
                "@preact/signals-react",
                "The README for the Preact Signals bindings for React",
                raw("preactjs/signals/main/packages/react"),
                None,
            ),
            Repository::new(
                "@preact/preset-vite",
                "The README for the Preact Vite preset",
                raw("preactjs/preset-vite/main"),
                None,
            ),
            Repository::new(
                "create-preact",
                "The README for the Create Preact app tool",
                raw("preactjs/create-preact/main"),
                None,
            ),
            Repository::new(
                "playwright-ct",
                "The README for the Playwright component testing integration for Preact",
                raw("preactjs/playwright-ct/main"),
                None,
            ),
            Repository::new(
                "vitest-browser-preact",
                "The README for the Vitest browser Preact integration",
                raw("jovidecroock/vitest-browser-preact/main"),
                None,
            ),
            Repository::new(
                "htm",
                "The README for the HTM library used with Preact",
                raw("developit/htm/master"),
                None,
            ),
        ])
    }

    pub fn all(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn find(&self, name: &str) -> Option<&Repository> {
        self.repositories.iter().find(|repo| repo.name == name)
    }

    /// Like [`Registry::find`], but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> Result<&Repository, NotFoundError> {
        self.find(name).ok_or_else(|| NotFoundError {
            repository: name.to_string(),
        })
    }

    /// Pretty-printed JSON listing, as returned by the list operation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.repositories)
    }
}
