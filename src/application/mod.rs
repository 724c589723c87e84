//! Application layer services implementing business logic.
//!
//! Services consume domain types and repository traits and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::config_service::ConfigService`] - Loading and syncing the link configuration
//! - [`services::redirect_service::RedirectService`] - Resolving requests to destinations

pub mod services;
