//! Resolution of a request against the compiled table.

use super::table::{CompiledLinks, CompiledTable};

/// Result of looking up a project (or simple link) and optional link type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Found(&'a str),
    NotFound,
    /// A link type was given for a key that resolves to a single destination.
    AmbiguousSingleLinkWithType,
    /// No link type was given for a project with several link types.
    AmbiguousMultiLinkNoType,
}

impl CompiledTable {
    /// Resolves `project` and `link_type` to a destination.
    ///
    /// Inputs are matched exactly; callers normalize case beforehand.
    pub fn resolve(&self, project: &str, link_type: Option<&str>) -> Outcome<'_> {
        let Some(links) = self.get(project) else {
            return Outcome::NotFound;
        };

        match (links, link_type) {
            (CompiledLinks::Single(destination), None) => Outcome::Found(destination),
            (CompiledLinks::Single(_), Some(_)) => Outcome::AmbiguousSingleLinkWithType,
            (CompiledLinks::Multiple(_), None) => Outcome::AmbiguousMultiLinkNoType,
            (CompiledLinks::Multiple(aliases), Some(link_type)) => aliases
                .get(link_type)
                .map_or(Outcome::NotFound, |destination| Outcome::Found(destination)),
        }
    }
}
