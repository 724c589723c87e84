//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;

pub use health::health_handler;
pub use redirect::{project_link_handler, simple_link_handler};
