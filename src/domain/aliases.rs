//! Alias expansion for project link types.
//!
//! A link type is reachable under its own name, its aliases (explicit or
//! built-in) and its additional aliases, in that order.

use super::entities::LinkEntry;

const GITHUB_ALIASES: &[&str] = &["github", "gh", "git", "src", "sources", "source", "vcs"];
const READ_THE_DOCS_ALIASES: &[&str] = &["rtd", "readthedocs", "read-the-docs", "docs", "wiki"];
const DOCS_ALIASES: &[&str] = &["docs", "wiki", "documentation"];

/// Returns the built-in alias group for a well-known link type name.
pub fn builtin_aliases(link_type: &str) -> Option<&'static [&'static str]> {
    match link_type {
        "github" | "gh" => Some(GITHUB_ALIASES),
        "read-the-docs" | "readthedocs" | "rtd" => Some(READ_THE_DOCS_ALIASES),
        "docs" | "wiki" => Some(DOCS_ALIASES),
        _ => None,
    }
}

/// Computes every name under which `entry` should be registered.
///
/// The result always starts with `link_type`. Explicit `aliases` suppress the
/// built-in group entirely, even when empty. Duplicates are kept; the table
/// compiler's last-write-wins insertion absorbs them.
///
/// # Examples
///
/// ```
/// use short_it::domain::aliases::expand_aliases;
/// use short_it::domain::entities::LinkEntry;
///
/// let entry = LinkEntry::new("https://example.com").with_additional_aliases(["manual"]);
/// assert_eq!(
///     expand_aliases("wiki", &entry),
///     ["wiki", "docs", "wiki", "documentation", "manual"]
/// );
/// ```
pub fn expand_aliases(link_type: &str, entry: &LinkEntry) -> Vec<String> {
    let mut aliases = vec![link_type.to_string()];

    match &entry.aliases {
        Some(explicit) => aliases.extend(explicit.iter().cloned()),
        None => {
            if let Some(group) = builtin_aliases(link_type) {
                aliases.extend(group.iter().map(|alias| alias.to_string()));
            }
        }
    }

    if let Some(additional) = &entry.additional_aliases {
        aliases.extend(additional.iter().cloned());
    }

    aliases
}
