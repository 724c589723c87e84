//! HTTP API layer for request/response handling.
//!
//! This layer normalizes incoming path segments, hands them to the
//! [`crate::application::services::RedirectService`] and formats the result.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
