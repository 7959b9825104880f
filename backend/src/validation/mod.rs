//! Validation of query parameters shared across the API endpoints.

pub mod rules;

/// Years the holiday calendar can be queried for.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
