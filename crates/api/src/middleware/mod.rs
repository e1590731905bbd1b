//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the bearer token in the `Authorization`
//!   header to the authenticated user.

pub mod auth;
