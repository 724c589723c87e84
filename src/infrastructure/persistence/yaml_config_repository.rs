//! YAML file implementation of the configuration repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::entities::LinkConfig;
use crate::domain::repositories::{ConfigError, LinkConfigRepository};

/// Repository backed by a single YAML document on disk.
///
/// A missing file is not an error: it loads as the default document and is
/// created on the first [`LinkConfigRepository::save`].
pub struct YamlConfigRepository {
    path: PathBuf,
}

impl YamlConfigRepository {
    /// Creates a repository for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl LinkConfigRepository for YamlConfigRepository {
    async fn load(&self) -> Result<LinkConfig, ConfigError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Config file not found, using defaults");
                return Ok(LinkConfig::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        // An empty file deserializes as YAML null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(LinkConfig::default());
        }

        let config: LinkConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            projects = config.projects.len(),
            simple = config.simple.len(),
            "Loaded config file"
        );

        Ok(config)
    }

    async fn save(&self, config: &LinkConfig) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), "Saved config file");
        Ok(())
    }
}
