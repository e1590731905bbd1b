//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- Opaque bearer-token generation and hashing.

pub mod password;
pub mod token;
