//! Shared domain types for the spotlog backend.

pub mod error;
pub mod roles;
pub mod types;
