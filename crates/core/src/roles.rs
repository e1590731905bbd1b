//! The closed set of user roles.
//!
//! Stored in PostgreSQL as the `user_role` enum type created in
//! `20260301000001_create_users_table.sql`. Authorization checks compare
//! against these variants rather than raw strings.

use serde::{Deserialize, Serialize};

/// A user's role. `Admin` may delete any spot; `User` only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}
