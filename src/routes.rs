//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                 - Health check (link table size)
//! - `GET  /{name}`                 - Simple link or single-link project
//! - `GET  /{project}/{link_type}`  - Project link type
//! - anything else                  - 404 page
//!
//! `/health` is a static route and takes priority over `/{name}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::fallback_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Path of the health endpoint; shadows any link with the same name.
pub const HEALTH_PATH: &str = "/health";

/// Constructs the application routes without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .merge(api::routes::redirect_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
