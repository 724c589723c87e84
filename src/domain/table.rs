//! Compilation of the configuration document into an exact-match lookup table.
//!
//! # Compilation Order
//!
//! 1. Simple links are inserted first
//! 2. Projects follow in declaration order; a project replaces a simple link
//!    of the same name
//! 3. Within a project, link types are expanded in declaration order and
//!    every alias is inserted; a later link type overwrites an alias an
//!    earlier one registered
//! 4. A project declared with exactly one link type collapses to its bare
//!    destination
//!
//! Compilation never fails. The result is immutable and meant to be shared
//! behind an [`std::sync::Arc`] for the lifetime of the process.

use indexmap::IndexMap;
use tracing::debug;

use super::aliases::expand_aliases;
use super::entities::{LinkConfig, ProjectLinks, SimpleLinks};

/// What a top-level key resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledLinks {
    /// Simple link or single-link project: no link type needed.
    Single(String),

    /// Multi-link project: alias to destination.
    Multiple(IndexMap<String, String>),
}

/// Counts describing a compiled table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub keys: usize,
    pub single: usize,
    pub multiple: usize,
    pub aliases: usize,
}

/// Flat resolution structure shared by simple links and projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTable {
    entries: IndexMap<String, CompiledLinks>,
}

impl CompiledTable {
    /// Compiles projects and simple links into a lookup table.
    pub fn compile(projects: &IndexMap<String, ProjectLinks>, simple: &SimpleLinks) -> Self {
        let mut entries: IndexMap<String, CompiledLinks> = simple
            .iter()
            .map(|(name, destination)| (name.clone(), CompiledLinks::Single(destination.clone())))
            .collect();

        for (project, links) in projects {
            entries.insert(project.clone(), compile_project(links));
        }

        let table = Self { entries };
        debug!(summary = ?table.summary(), "Compiled link table");
        table
    }

    /// Compiles the `projects` and `simple` sections of a document.
    pub fn from_config(config: &LinkConfig) -> Self {
        Self::compile(&config.projects, &config.simple)
    }

    pub fn get(&self, key: &str) -> Option<&CompiledLinks> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledLinks)> {
        self.entries.iter().map(|(key, links)| (key.as_str(), links))
    }

    pub fn summary(&self) -> TableSummary {
        self.entries
            .values()
            .fold(TableSummary::default(), |mut summary, links| {
                summary.keys += 1;
                match links {
                    CompiledLinks::Single(_) => summary.single += 1,
                    CompiledLinks::Multiple(aliases) => {
                        summary.multiple += 1;
                        summary.aliases += aliases.len();
                    }
                }
                summary
            })
    }
}

/// Compiles one project's link types.
///
/// Collapse depends on the number of declared link types, not on how many
/// aliases they produced. A project with no link types stays an empty map.
fn compile_project(links: &ProjectLinks) -> CompiledLinks {
    if links.len() == 1
        && let Some((_, entry)) = links.first()
    {
        return CompiledLinks::Single(entry.destination.clone());
    }

    let mut aliases = IndexMap::new();
    for (link_type, entry) in links {
        for alias in expand_aliases(link_type, entry) {
            aliases.insert(alias, entry.destination.clone());
        }
    }

    CompiledLinks::Multiple(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkEntry;

    fn project(links: &[(&str, LinkEntry)]) -> ProjectLinks {
        links
            .iter()
            .map(|(name, entry)| (name.to_string(), entry.clone()))
            .collect()
    }

    fn aliases_of<'a>(table: &'a CompiledTable, key: &str) -> &'a IndexMap<String, String> {
        match table.get(key) {
            Some(CompiledLinks::Multiple(aliases)) => aliases,
            other => panic!("expected multi-link entry for {key}, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_empty() {
        let table = CompiledTable::compile(&IndexMap::new(), &SimpleLinks::new());

        assert!(table.is_empty());
        assert_eq!(table.summary(), TableSummary::default());
    }

    #[test]
    fn test_compile_simple_links() {
        let simple = SimpleLinks::from([("x".to_string(), "https://a".to_string())]);
        let table = CompiledTable::compile(&IndexMap::new(), &simple);

        assert_eq!(table.get("x"), Some(&CompiledLinks::Single("https://a".into())));
    }

    #[test]
    fn test_single_link_project_collapses() {
        let projects = IndexMap::from([(
            "p".to_string(),
            project(&[(
                "github",
                LinkEntry::new("https://g").with_additional_aliases(["repo"]),
            )]),
        )]);

        let table = CompiledTable::compile(&projects, &SimpleLinks::new());

        assert_eq!(table.get("p"), Some(&CompiledLinks::Single("https://g".into())));
    }

    #[test]
    fn test_multi_link_project_registers_every_alias() {
        let projects = IndexMap::from([(
            "p".to_string(),
            project(&[
                ("github", LinkEntry::new("https://g")),
                ("chat", LinkEntry::new("https://c").with_aliases(["discord"])),
            ]),
        )]);

        let table = CompiledTable::compile(&projects, &SimpleLinks::new());
        let aliases = aliases_of(&table, "p");

        for alias in ["github", "gh", "git", "src", "sources", "source", "vcs"] {
            assert_eq!(aliases[alias], "https://g");
        }
        assert_eq!(aliases["chat"], "https://c");
        assert_eq!(aliases["discord"], "https://c");
        assert_eq!(aliases.len(), 9);
    }

    #[test]
    fn test_later_link_type_overwrites_alias() {
        let projects = IndexMap::from([(
            "p".to_string(),
            project(&[
                ("rtd", LinkEntry::new("https://rtd")),
                ("docs", LinkEntry::new("https://docs")),
            ]),
        )]);

        let table = CompiledTable::compile(&projects, &SimpleLinks::new());
        let aliases = aliases_of(&table, "p");

        assert_eq!(aliases["rtd"], "https://rtd");
        assert_eq!(aliases["readthedocs"], "https://rtd");
        assert_eq!(aliases["docs"], "https://docs");
        assert_eq!(aliases["wiki"], "https://docs");
        assert_eq!(aliases["documentation"], "https://docs");
    }

    #[test]
    fn test_project_replaces_simple_link() {
        let simple = SimpleLinks::from([
            ("p".to_string(), "https://simple".to_string()),
            ("other".to_string(), "https://other".to_string()),
        ]);
        let projects = IndexMap::from([(
            "p".to_string(),
            project(&[("home", LinkEntry::new("https://project"))]),
        )]);

        let table = CompiledTable::compile(&projects, &simple);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("p"), Some(&CompiledLinks::Single("https://project".into())));
        assert_eq!(table.get("other"), Some(&CompiledLinks::Single("https://other".into())));
    }

    #[test]
    fn test_project_without_links_is_empty_map() {
        let projects = IndexMap::from([("p".to_string(), ProjectLinks::new())]);
        let table = CompiledTable::compile(&projects, &SimpleLinks::new());

        assert!(aliases_of(&table, "p").is_empty());
    }

    #[test]
    fn test_compile_is_idempotent() {
        let config: LinkConfig = serde_yaml::from_str(
            r#"
projects:
  a:
    github: { to: "https://g" }
    docs: { to: "https://d", additional_aliases: [guide] }
  b:
    site: { to: "https://b" }
simple:
  blog: https://blog
"#,
        )
        .unwrap();

        assert_eq!(CompiledTable::from_config(&config), CompiledTable::from_config(&config));
    }

    #[test]
    fn test_compile_ignores_prior_builtin_resolution() {
        let mut config: LinkConfig = serde_yaml::from_str(
            r#"
projects:
  a:
    github: { to: "https://g" }
    wiki: { to: "https://w" }
"#,
        )
        .unwrap();
        let before = CompiledTable::from_config(&config);

        config.resolve_builtin_aliases();

        assert_eq!(CompiledTable::from_config(&config), before);
    }

    #[test]
    fn test_summary() {
        let simple = SimpleLinks::from([("s".to_string(), "https://s".to_string())]);
        let projects = IndexMap::from([
            ("one".to_string(), project(&[("home", LinkEntry::new("https://1"))])),
            (
                "two".to_string(),
                project(&[
                    ("home", LinkEntry::new("https://2")),
                    ("chat", LinkEntry::new("https://3")),
                ]),
            ),
        ]);

        let summary = CompiledTable::compile(&projects, &simple).summary();

        assert_eq!(
            summary,
            TableSummary {
                keys: 3,
                single: 2,
                multiple: 1,
                aliases: 2,
            }
        );
    }
}
