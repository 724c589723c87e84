//! Repository trait definitions for the domain layer.
//!
//! The link configuration is the only persisted data. The trait here
//! abstracts where it comes from; the YAML implementation lives in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See `tests/repository_config.rs` for the file-backed implementation.

pub mod link_config_repository;

pub use link_config_repository::{ConfigError, LinkConfigRepository};

#[cfg(test)]
pub use link_config_repository::MockLinkConfigRepository;
