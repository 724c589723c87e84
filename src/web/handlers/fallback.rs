//! Fallback handler for paths no route matches.

use axum::http::Uri;

use crate::error::AppError;

/// Renders the 404 page for any unrouted path, e.g. `/a/b/c`.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
