//! Redirect route configuration.

use crate::api::handlers::{project_link_handler, simple_link_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public redirect routes.
///
/// # Endpoints
///
/// - `GET /{name}`                - Simple link or single-link project
/// - `GET /{project}/{link_type}` - Link type of a multi-link project
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route("/{name}", get(simple_link_handler))
        .route("/{project}/{link_type}", get(project_link_handler))
}
