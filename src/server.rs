//! HTTP server initialization and runtime setup.
//!
//! Compiles the link table, builds shared state and runs the Axum server
//! until Ctrl-C.

use crate::application::services::RedirectService;
use crate::config::Config;
use crate::domain::entities::LinkConfig;
use crate::routes::{HEALTH_PATH, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Compiled link table (once, shared by every request)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, link_config: LinkConfig) -> Result<()> {
    let redirect_service = RedirectService::from_config(&link_config);

    let summary = redirect_service.summary();
    tracing::info!(
        keys = summary.keys,
        single = summary.single,
        multiple = summary.multiple,
        aliases = summary.aliases,
        "Link table compiled"
    );

    let reserved = HEALTH_PATH.trim_start_matches('/');
    if redirect_service.table().get(reserved).is_some() {
        tracing::warn!(
            "Link '{}' is shadowed by the health endpoint and cannot be reached",
            reserved
        );
    }

    let state = AppState::new(Arc::new(redirect_service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
