//! Link entry entity representing one configured destination of a project.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::aliases::builtin_aliases;

/// Link types of a single project, keyed by the name written in the config.
///
/// Declaration order is preserved; it decides which entry wins when two
/// link types of the same project share an alias.
pub type ProjectLinks = IndexMap<String, LinkEntry>;

/// Project-less links: bare name to destination.
pub type SimpleLinks = IndexMap<String, String>;

/// A destination configured under a project link type.
///
/// `aliases` distinguishes "not configured" (`None`) from "configured as
/// empty" (`Some(vec![])`): only the former is eligible for built-in alias
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(rename = "to")]
    pub destination: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_aliases: Option<Vec<String>>,
}

impl LinkEntry {
    /// Creates an entry with no aliases configured.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            aliases: None,
            additional_aliases: None,
        }
    }

    /// Sets explicit aliases, disabling built-in expansion for this entry.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    /// Sets additional aliases, appended after explicit or built-in ones.
    pub fn with_additional_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    /// Fills `aliases` with the built-in group for `link_type`.
    ///
    /// Does nothing when `aliases` is already set (even to an empty list) or
    /// when `link_type` has no built-in group, so calling it repeatedly is safe.
    pub fn resolve_builtin_aliases(&mut self, link_type: &str) {
        if self.aliases.is_some() {
            return;
        }

        if let Some(group) = builtin_aliases(link_type) {
            self.aliases = Some(group.iter().map(|alias| alias.to_string()).collect());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_aliases_github() {
        let mut entry = LinkEntry::new("https://github.com/example/repo");
        entry.resolve_builtin_aliases("gh");

        assert_eq!(
            entry.aliases,
            Some(
                ["github", "gh", "git", "src", "sources", "source", "vcs"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }

    #[test]
    fn test_resolve_builtin_aliases_keeps_explicit() {
        let mut entry = LinkEntry::new("https://example.com").with_aliases(["code"]);
        entry.resolve_builtin_aliases("github");

        assert_eq!(entry.aliases, Some(vec!["code".to_string()]));
    }

    #[test]
    fn test_resolve_builtin_aliases_keeps_explicit_empty() {
        let mut entry = LinkEntry::new("https://example.com").with_aliases(Vec::<String>::new());
        entry.resolve_builtin_aliases("docs");

        assert_eq!(entry.aliases, Some(vec![]));
    }

    #[test]
    fn test_resolve_builtin_aliases_unknown_type() {
        let mut entry = LinkEntry::new("https://example.com");
        entry.resolve_builtin_aliases("chat");

        assert!(entry.aliases.is_none());
    }

    #[test]
    fn test_resolve_builtin_aliases_runs_once() {
        let mut entry = LinkEntry::new("https://example.com");
        entry.resolve_builtin_aliases("wiki");
        let first = entry.aliases.clone();

        entry.resolve_builtin_aliases("github");

        assert_eq!(entry.aliases, first);
    }

    #[test]
    fn test_deserialize_distinguishes_absent_and_empty() {
        let absent: LinkEntry = serde_yaml::from_str("to: https://a.example").unwrap();
        let empty: LinkEntry = serde_yaml::from_str("to: https://a.example\naliases: []").unwrap();

        assert!(absent.aliases.is_none());
        assert_eq!(empty.aliases, Some(vec![]));
        assert!(empty.additional_aliases.is_none());
    }
}
