//! Browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers, including the router fallback
//! - [`pages`] - Template definitions

pub mod handlers;
pub mod pages;
