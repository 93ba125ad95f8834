//! Foundational data structures, error types, and record layouts.

pub mod error;
pub mod models;
pub mod schema;
