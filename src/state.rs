//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::RedirectService;

/// Application state cloned into each request.
///
/// Built once at startup; the link table inside is immutable, so clones are
/// cheap and need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    pub fn new(redirect_service: Arc<RedirectService>) -> Self {
        Self { redirect_service }
    }
}
