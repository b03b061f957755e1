use crate::service::DocsService;

/// Lists every queryable repository as pretty-printed JSON.
pub fn handle_list_repositories(service: &DocsService) -> Result<String, String> {
    service
        .registry()
        .to_json()
        .map_err(|e| format!("Failed to serialize repositories: {}", e))
}
