use preact_docs_mcp::{DocsServer, EngineConfig, logging};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    tracing::info!("Starting preact-docs-mcp v{}", env!("CARGO_PKG_VERSION"));

    let server = DocsServer::from_config(&EngineConfig::default())?;

    // stdout belongs to the protocol; logs go to stderr
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;
    tracing::info!("Client disconnected, shutting down");

    Ok(())
}
