//! Preact documentation retrieval: a TTL-cached fetcher, a docs-feed parser,
//! a weighted full-text index with priority ranking, and an MCP front-end.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod search;
pub mod server;
pub mod service;
pub mod tools;
pub mod types;

pub use cache::CacheStore;
pub use config::EngineConfig;
pub use error::{DocsError, FetchCause, FetchError, NotFoundError};
pub use fetch::{Fetcher, HttpTransport, Transport};
pub use registry::{PRIMARY_REPOSITORY, Registry, Repository};
pub use search::DocsIndex;
pub use server::DocsServer;
pub use service::DocsService;
pub use types::{Category, DocumentSection, Priority};
