//! MCP server exposing the documentation tools over stdio.

use crate::config::EngineConfig;
use crate::service::DocsService;
use crate::tools::{
    GetReadmeRequest, QueryDocsRequest, handle_get_readme, handle_list_repositories,
    handle_query_docs,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for Preact documentation queries
#[derive(Clone)]
pub struct DocsServer {
    /// Shared retrieval engine (cache, index, registry)
    service: Arc<DocsService>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("service", &self.service)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(service: Arc<DocsService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Server over the builtin registry and a real HTTP client.
    pub fn from_config(config: &EngineConfig) -> reqwest::Result<Self> {
        Ok(Self::new(Arc::new(DocsService::from_config(config)?)))
    }

    #[tool(description = "Query Preact documentation from multiple repositories.")]
    async fn query_preact_docs(
        &self,
        Parameters(request): Parameters<QueryDocsRequest>,
    ) -> Result<String, String> {
        handle_query_docs(&self.service, request)
            .await
            .map_err(|e| format!("Error: {}", e))
    }

    #[tool(description = "Get the README content from a specific Preact repository")]
    async fn get_preact_readme(
        &self,
        Parameters(request): Parameters<GetReadmeRequest>,
    ) -> Result<String, String> {
        handle_get_readme(&self.service, request)
            .await
            .map_err(|e| format!("Error: {}", e))
    }

    #[tool(
        description = "List all available Preact repositories that can be queried, this allows you to have information about the Preact ecosystem."
    )]
    async fn list_preact_repositories(&self) -> Result<String, String> {
        handle_list_repositories(&self.service).map_err(|e| format!("Error: {}", e))
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "preact-docs-mcp: Query Preact documentation and ecosystem READMEs. \
                 Use list_preact_repositories to see what can be queried, \
                 query_preact_docs to search the docs feed, and get_preact_readme for raw READMEs.",
            )
    }
}
