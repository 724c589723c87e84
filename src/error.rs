use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::web::pages::NotFoundTemplate;

/// Errors surfaced to HTTP clients.
///
/// Neither variant indicates a server fault: both describe a request that
/// does not match the configured links.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No link found for {path}")]
    NotFound { path: String },

    #[error("{message}")]
    AmbiguousRequest { message: String },
}

impl AppError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self::AmbiguousRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { path } => {
                (StatusCode::NOT_FOUND, NotFoundTemplate { path }).into_response()
            }
            AppError::AmbiguousRequest { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
