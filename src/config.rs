//! Process configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The links themselves live in the YAML document at `CONFIG_PATH`,
//! see [`crate::domain::entities::LinkConfig`].
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `CONFIG_PATH` - Link configuration document (default: `data/config.yml`)
//! - `RUST_LOG` - Log filter; overrides `logging.level` from the document
//! - `LOG_FORMAT` - `text` or `json`; overrides `logging.json` from the document
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export CONFIG_PATH="/etc/short-it/config.yml"
//! export LOG_FORMAT="json"
//! ```

use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CONFIG_PATH: &str = "data/config.yml";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub config_path: PathBuf,
    /// `RUST_LOG`, when set.
    pub log_level: Option<String>,
    /// `LOG_FORMAT`, when set.
    pub log_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_level: None,
            log_format: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional; empty values count as unset.
    pub fn from_env() -> Self {
        let listen_addr = non_empty_var("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let config_path = non_empty_var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self {
            listen_addr,
            config_path,
            log_level: non_empty_var("RUST_LOG"),
            log_format: non_empty_var("LOG_FORMAT"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is set to something other than `text` or `json`
    /// - `config_path` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref format) = self.log_format
            && format != "text"
            && format != "json"
        {
            anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", format);
        }

        if self.config_path.as_os_str().is_empty() {
            anyhow::bail!("CONFIG_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Config file: {}", self.config_path.display());

        if let Some(ref level) = self.log_level {
            tracing::info!("  Log level: {} (from RUST_LOG)", level);
        }
        if let Some(ref format) = self.log_format {
            tracing::info!("  Log format: {} (from LOG_FORMAT)", format);
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
