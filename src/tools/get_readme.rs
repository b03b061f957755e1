use crate::error::DocsError;
use crate::service::DocsService;
use rmcp::schemars;
use serde::Deserialize;

/// Parameters for get_preact_readme tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetReadmeRequest {
    /// The repository to get the README from (see list_preact_repositories)
    pub repository: String,
}

pub async fn handle_get_readme(
    service: &DocsService,
    request: GetReadmeRequest,
) -> Result<String, DocsError> {
    service.get_readme(&request.repository).await
}
