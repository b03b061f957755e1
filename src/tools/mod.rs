pub mod get_readme;
pub mod list_repositories;
pub mod query_docs;

pub use get_readme::*;
pub use list_repositories::*;
pub use query_docs::*;
