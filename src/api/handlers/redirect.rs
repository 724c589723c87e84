//! Handlers for link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::normalize::normalize_segment;

/// Redirects a project link type to its destination.
///
/// # Endpoint
///
/// `GET /{project}/{link_type}`
///
/// Both segments are normalized (trimmed, lower-cased) before lookup, so
/// `/Short-It/GH` and `/short-it/gh` are the same request.
///
/// # Errors
///
/// Returns 404 Not Found if the project or link type is unknown.
/// Returns 400 Bad Request if the project has a single link, which is only
/// reachable without a link type.
pub async fn project_link_handler(
    Path((project, link_type)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let project = normalize_segment(&project);
    let link_type = normalize_segment(&link_type);

    let destination = state
        .redirect_service
        .resolve(&project, Some(&link_type))?;

    Ok(Redirect::temporary(&destination))
}

/// Redirects a simple link or single-link project to its destination.
///
/// # Endpoint
///
/// `GET /{name}`
///
/// The segment is normalized before lookup.
///
/// # Errors
///
/// Returns 404 Not Found if the name is unknown.
/// Returns 400 Bad Request if `name` is a project with several link types.
pub async fn simple_link_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let name = normalize_segment(&name);

    let destination = state.redirect_service.resolve(&name, None)?;

    Ok(Redirect::temporary(&destination))
}
