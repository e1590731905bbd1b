//! API token model and the identity row resolved from a presented token.

use spotlog_core::roles::Role;
use spotlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `api_tokens` table. Holds only the SHA-256 digest of the
/// plaintext token.
#[derive(Debug, Clone, FromRow)]
pub struct ApiToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub name: String,
    pub last_used_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for persisting a freshly issued token.
#[derive(Debug)]
pub struct CreateApiToken {
    pub user_id: DbId,
    pub token_hash: String,
    pub name: String,
}

/// The identity carried by a valid bearer token: token row joined with its
/// owning user. This is what request handlers see as "the current user".
#[derive(Debug, Clone, FromRow)]
pub struct TokenIdentity {
    pub token_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}
