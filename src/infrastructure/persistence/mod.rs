//! File-backed repository implementations.
//!
//! # Repositories
//!
//! - [`YamlConfigRepository`] - Link configuration stored as a YAML document

pub mod yaml_config_repository;

pub use yaml_config_repository::YamlConfigRepository;
