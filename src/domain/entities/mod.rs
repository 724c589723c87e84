//! Core domain entities representing the configured links.
//!
//! Entities are plain data structures deserialized from the configuration
//! document. The only mutation they support is the one-time built-in alias
//! fill on [`LinkEntry`].
//!
//! # Entity Types
//!
//! - [`LinkConfig`] - The whole document: projects, simple links, logging
//! - [`LinkEntry`] - One destination under a project link type
//! - [`ProjectLinks`] / [`SimpleLinks`] - Insertion-ordered maps

pub mod link_config;
pub mod link_entry;

pub use link_config::{LinkConfig, LoggingSection};
pub use link_entry::{LinkEntry, ProjectLinks, SimpleLinks};
