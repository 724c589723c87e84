//! The link configuration document as written by the operator.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::link_entry::{ProjectLinks, SimpleLinks};
use crate::utils::destination::check_destination;
use crate::utils::normalize::normalize_segment;

/// Logging preferences stored alongside the links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Level or `EnvFilter` directive, e.g. `info` or `short_it=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Full configuration document.
///
/// Every section is optional in the file; missing sections take their
/// defaults, which is how a partial file is merged with the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Public host name the service is reachable at. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub projects: IndexMap<String, ProjectLinks>,

    #[serde(default)]
    pub simple: SimpleLinks,
}

impl LinkConfig {
    /// Applies built-in aliases to every project link that has none configured.
    pub fn resolve_builtin_aliases(&mut self) {
        for links in self.projects.values_mut() {
            for (link_type, entry) in links.iter_mut() {
                entry.resolve_builtin_aliases(link_type);
            }
        }
    }

    /// Collects problems worth reporting to the operator.
    ///
    /// None of them prevent the table from being compiled.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (name, destination) in &self.simple {
            check_key(&mut warnings, "simple link", name);
            if let Err(e) = check_destination(destination) {
                warnings.push(format!("simple link '{name}': {e}"));
            }
            if self.projects.contains_key(name) {
                warnings.push(format!(
                    "simple link '{name}' is shadowed by a project with the same name"
                ));
            }
        }

        for (project, links) in &self.projects {
            check_key(&mut warnings, "project", project);
            if links.is_empty() {
                warnings.push(format!("project '{project}' has no links"));
            }

            for (link_type, entry) in links {
                check_key(&mut warnings, "link type", link_type);
                if let Err(e) = check_destination(&entry.destination) {
                    warnings.push(format!("project '{project}', link '{link_type}': {e}"));
                }
            }
        }

        warnings
    }
}

fn check_key(warnings: &mut Vec<String>, kind: &str, key: &str) {
    if normalize_segment(key) != key {
        warnings.push(format!(
            "{kind} '{key}' is not lower-case and trimmed; requests are normalized and will never match it"
        ));
    }
}
