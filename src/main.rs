use anyhow::{Context, Result};
use short_it::application::services::ConfigService;
use short_it::config;
use short_it::infrastructure::persistence::YamlConfigRepository;
use short_it::logging::{self, LogSettings};
use short_it::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    // Startup messages emitted while loading the document go through here
    let bootstrap = logging::bootstrap(&config);
    let repository = Arc::new(YamlConfigRepository::new(config.config_path.clone()));
    let link_config = ConfigService::new(repository)
        .load_and_sync()
        .await
        .context("Failed to load link configuration")?;
    drop(bootstrap);

    logging::init(&LogSettings::resolve(&config, &link_config.logging))?;
    config.print_summary();

    for warning in link_config.warnings() {
        tracing::warn!("Config: {}", warning);
    }

    server::run(config, link_config).await
}
