//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod expense;
pub mod spot;
pub mod user;
