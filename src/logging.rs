//! Logging initialisation.
//!
//! The document's `logging` section provides defaults; `RUST_LOG` and
//! `LOG_FORMAT` override them. Until the document is loaded, [`bootstrap`]
//! installs a scoped subscriber built from the environment alone.

use anyhow::{Context, Result};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::domain::entities::LoggingSection;

/// Effective logging settings after applying environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub json: bool,
}

impl LogSettings {
    pub fn resolve(config: &Config, section: &LoggingSection) -> Self {
        let filter = config
            .log_level
            .clone()
            .unwrap_or_else(|| section.level.clone());
        let json = match config.log_format.as_deref() {
            Some(format) => format == "json",
            None => section.json,
        };

        Self { filter, json }
    }
}

/// Filter used before the document's `logging` section is known.
const BOOTSTRAP_FILTER: &str = "info";

/// Installs a subscriber for the current thread while the document loads.
///
/// Honours `RUST_LOG` and `LOG_FORMAT`, falling back to `info` text output.
/// Drop the guard before calling [`init`].
pub fn bootstrap(config: &Config) -> DefaultGuard {
    let filter = config
        .log_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format.as_deref() == Some("json") {
        tracing::subscriber::set_default(builder.json().finish())
    } else {
        tracing::subscriber::set_default(builder.finish())
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.filter)
        .with_context(|| format!("Invalid log filter '{}'", settings.filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    tracing::debug!(filter = %settings.filter, json = settings.json, "Logging was set up");

    Ok(())
}
