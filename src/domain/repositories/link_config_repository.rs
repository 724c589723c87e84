//! Repository trait for the link configuration document.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::entities::LinkConfig;

/// Errors that can occur while reading or writing the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Source of the link configuration loaded at startup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::YamlConfigRepository`] - YAML file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkConfigRepository: Send + Sync {
    /// Loads the document, falling back to defaults for anything missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the source exists but cannot be read.
    /// Returns [`ConfigError::Parse`] if the document is not well-formed.
    async fn load(&self) -> Result<LinkConfig, ConfigError>;

    /// Persists the document, replacing what was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Serialize`] on failure.
    async fn save(&self, config: &LinkConfig) -> Result<(), ConfigError>;
}
