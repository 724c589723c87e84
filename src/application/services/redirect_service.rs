//! Redirect resolution service.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::LinkConfig;
use crate::domain::resolution::Outcome;
use crate::domain::table::{CompiledTable, TableSummary};
use crate::error::AppError;

/// Message for a link type given where the key has a single destination.
pub const SINGLE_LINK_WITH_TYPE: &str = "Project has only one link, but you specified link type";

/// Message for a missing link type on a project with several links.
pub const MULTI_LINK_NO_TYPE: &str =
    "Project has multiple links, but you didn't specify link type";

/// Service answering redirect requests from the compiled link table.
///
/// The table is compiled once and never changes; clones of the service share
/// it, so concurrent requests need no locking.
#[derive(Debug, Clone)]
pub struct RedirectService {
    table: Arc<CompiledTable>,
    domain: Option<String>,
}

impl RedirectService {
    /// Creates a service over an already compiled table.
    pub fn new(table: Arc<CompiledTable>, domain: Option<String>) -> Self {
        Self { table, domain }
    }

    /// Compiles `config` and creates a service over the result.
    pub fn from_config(config: &LinkConfig) -> Self {
        Self::new(
            Arc::new(CompiledTable::from_config(config)),
            config.domain.clone(),
        )
    }

    /// Resolves a request to its destination URL.
    ///
    /// `project` and `link_type` must already be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing matches.
    /// Returns [`AppError::AmbiguousRequest`] if the link type was given for a
    /// single-link key or omitted for a multi-link project.
    pub fn resolve(&self, project: &str, link_type: Option<&str>) -> Result<String, AppError> {
        let outcome = self.table.resolve(project, link_type);
        debug!(project, link_type, ?outcome, "Resolved link");

        match outcome {
            Outcome::Found(destination) => Ok(destination.to_string()),
            Outcome::NotFound => Err(AppError::not_found(request_path(project, link_type))),
            Outcome::AmbiguousSingleLinkWithType => {
                Err(AppError::ambiguous(SINGLE_LINK_WITH_TYPE))
            }
            Outcome::AmbiguousMultiLinkNoType => Err(AppError::ambiguous(MULTI_LINK_NO_TYPE)),
        }
    }

    pub fn table(&self) -> &CompiledTable {
        &self.table
    }

    pub fn summary(&self) -> TableSummary {
        self.table.summary()
    }

    /// Public host name from the configuration, if any.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

fn request_path(project: &str, link_type: Option<&str>) -> String {
    match link_type {
        Some(link_type) => format!("/{project}/{link_type}"),
        None => format!("/{project}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> RedirectService {
        let config: LinkConfig = serde_yaml::from_str(
            r#"
domain: s.example.com
projects:
  single:
    github: { to: "https://github.com/single" }
  multi:
    github: { to: "https://github.com/multi" }
    docs: { to: "https://multi.readthedocs.io" }
simple:
  blog: https://blog.example.com
"#,
        )
        .unwrap();

        RedirectService::from_config(&config)
    }

    #[test]
    fn test_resolve_found() {
        let service = create_test_service();

        assert_eq!(service.resolve("blog", None).unwrap(), "https://blog.example.com");
        assert_eq!(service.resolve("single", None).unwrap(), "https://github.com/single");
        assert_eq!(
            service.resolve("multi", Some("src")).unwrap(),
            "https://github.com/multi"
        );
        assert_eq!(
            service.resolve("multi", Some("documentation")).unwrap(),
            "https://multi.readthedocs.io"
        );
    }

    #[test]
    fn test_resolve_not_found() {
        let service = create_test_service();

        match service.resolve("multi", Some("chat")) {
            Err(AppError::NotFound { path }) => assert_eq!(path, "/multi/chat"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        match service.resolve("missing", None) {
            Err(AppError::NotFound { path }) => assert_eq!(path, "/missing"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_ambiguous() {
        let service = create_test_service();

        match service.resolve("single", Some("gh")) {
            Err(AppError::AmbiguousRequest { message }) => {
                assert_eq!(message, SINGLE_LINK_WITH_TYPE)
            }
            other => panic!("expected AmbiguousRequest, got {other:?}"),
        }
        match service.resolve("multi", None) {
            Err(AppError::AmbiguousRequest { message }) => assert_eq!(message, MULTI_LINK_NO_TYPE),
            other => panic!("expected AmbiguousRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_clones_share_table() {
        let service = create_test_service();
        let clone = service.clone();

        assert!(std::ptr::eq(service.table(), clone.table()));
        assert_eq!(clone.domain(), Some("s.example.com"));
        assert_eq!(clone.summary().keys, 3);
    }
}
