use crate::error::DocsError;
use crate::registry::PRIMARY_REPOSITORY;
use crate::service::DocsService;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QueryDocsRequest {
    /// The search query for the Preact documentation
    pub query: String,
    /// Which repository to search in (default: preact)
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Include the first code example of each result (default: true)
    #[serde(default = "default_include_examples")]
    pub include_examples: bool,
}

fn default_repository() -> String {
    PRIMARY_REPOSITORY.to_string()
}

fn default_include_examples() -> bool {
    true
}

pub async fn handle_query_docs(
    service: &DocsService,
    request: QueryDocsRequest,
) -> Result<String, DocsError> {
    tracing::debug!(
        "query_docs '{}' in '{}' (examples: {})",
        request.query,
        request.repository,
        request.include_examples
    );
    service
        .query_docs(&request.query, &request.repository, request.include_examples)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_defaults() {
        let request: QueryDocsRequest = serde_json::from_str(r#"{"query": "hooks"}"#).unwrap();
        check!(request.repository == "preact");
        check!(request.include_examples);
    }

    #[test]
    fn test_explicit_values() {
        let request: QueryDocsRequest = serde_json::from_str(
            r#"{"query": "effect", "repository": "@preact/signals", "include_examples": false}"#,
        )
        .unwrap();
        check!(request.repository == "@preact/signals");
        check!(!request.include_examples);
    }
}
