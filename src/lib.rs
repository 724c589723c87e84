//! # Short It
//!
//! A small link redirection service: `/{project}/{link_type}` and `/{name}`
//! redirect to destinations declared in a YAML document.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entries, alias expansion, table compilation and resolution
//! - **Application Layer** ([`application`]) - Config loading and redirect services
//! - **Infrastructure Layer** ([`infrastructure`]) - YAML file persistence
//! - **API Layer** ([`api`]) - Redirect and health handlers, DTOs, middleware
//! - **Web Layer** ([`web`]) - HTML 404 page
//!
//! ## Configuration Document
//!
//! ```yaml
//! domain: s.example.com
//! logging:
//!   level: info
//!   json: false
//! projects:
//!   short-it:
//!     github:
//!       to: https://github.com/example/short-it
//!     docs:
//!       to: https://short-it.readthedocs.io
//!       additional_aliases: [manual]
//! simple:
//!   blog: https://blog.example.com
//! ```
//!
//! With this document `/blog` redirects to the blog, `/short-it/gh` to the
//! repository and `/short-it/wiki` to the documentation. Well-known link
//! types (`github`, `rtd`, `docs`, ...) get built-in aliases unless
//! `aliases` is set explicitly.
//!
//! ## Quick Start
//!
//! ```bash
//! export CONFIG_PATH="data/config.yml"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Process settings are loaded from environment variables via [`config::Config`].
//! The link table is compiled once at startup; restart to pick up changes.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ConfigService, RedirectService};
    pub use crate::domain::entities::{LinkConfig, LinkEntry};
    pub use crate::domain::resolution::Outcome;
    pub use crate::domain::table::{CompiledLinks, CompiledTable};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
