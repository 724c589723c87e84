//! Business logic services for the application layer.

pub mod config_service;
pub mod redirect_service;

pub use config_service::ConfigService;
pub use redirect_service::RedirectService;
