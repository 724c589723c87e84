//! Handlers rendering HTML pages.

pub mod fallback;

pub use fallback::fallback_handler;
