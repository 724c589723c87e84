//! Domain layer: configured links and the logic that turns them into redirects.
//!
//! # Architecture
//!
//! - [`entities`] - Configuration document and link entries
//! - [`aliases`] - Built-in and user alias expansion per link type
//! - [`table`] - Compilation into a flat lookup table
//! - [`resolution`] - Per-request lookup against the compiled table
//! - [`repositories`] - Configuration source trait
//!
//! # Data Flow
//!
//! 1. A [`repositories::LinkConfigRepository`] loads the [`entities::LinkConfig`]
//! 2. [`table::CompiledTable::from_config`] expands aliases and flattens it once
//! 3. [`table::CompiledTable::resolve`] answers each request with an
//!    [`resolution::Outcome`]
//!
//! The domain layer does no I/O and never fails on well-formed input.

pub mod aliases;
pub mod entities;
pub mod repositories;
pub mod resolution;
pub mod table;
