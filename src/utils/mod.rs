//! Utility functions shared by the HTTP layer and configuration checks.
//!
//! - [`normalize`] - Request path segment normalization
//! - [`destination`] - Destination URL sanity checks

pub mod destination;
pub mod normalize;
