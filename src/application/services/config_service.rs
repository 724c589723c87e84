//! Loading of the link configuration document at startup.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::LinkConfig;
use crate::domain::repositories::{ConfigError, LinkConfigRepository};

/// Service for reading the configuration document from its repository.
pub struct ConfigService<R: LinkConfigRepository> {
    repository: Arc<R>,
}

impl<R: LinkConfigRepository> ConfigService<R> {
    /// Creates a new config service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads the document without touching the stored copy.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the repository.
    pub async fn load(&self) -> Result<LinkConfig, ConfigError> {
        self.repository.load().await
    }

    /// Loads the document and writes the merged result back.
    ///
    /// The stored copy gains every default section, so the operator sees the
    /// complete schema after the first start. Built-in aliases are applied
    /// only to the returned value, never persisted, so they stay active for
    /// entries without explicit aliases.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the repository.
    pub async fn load_and_sync(&self) -> Result<LinkConfig, ConfigError> {
        let mut config = self.repository.load().await?;
        self.repository.save(&config).await?;

        config.resolve_builtin_aliases();
        info!(
            projects = config.projects.len(),
            simple = config.simple.len(),
            "Link configuration loaded"
        );

        Ok(config)
    }

    /// Writes the default document.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the repository.
    pub async fn reset(&self) -> Result<LinkConfig, ConfigError> {
        let config = LinkConfig::default();
        self.repository.save(&config).await?;
        warn!("Link configuration reset to defaults");
        Ok(config)
    }
}
