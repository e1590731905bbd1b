//! Repository for the `api_tokens` table.

use sqlx::PgPool;
use spotlog_core::types::DbId;

use crate::models::token::{ApiToken, CreateApiToken, TokenIdentity};

const COLUMNS: &str = "id, user_id, token_hash, name, last_used_at, created_at";

/// Issues, resolves, and revokes opaque bearer tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Persist a freshly issued token (hash only), returning the row.
    pub async fn create(pool: &PgPool, input: &CreateApiToken) -> Result<ApiToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO api_tokens (user_id, token_hash, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApiToken>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Resolve a presented token hash to its owning user, stamping
    /// `last_used_at` in the same statement. Returns `None` for unknown
    /// (or already revoked) tokens.
    pub async fn authenticate(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<TokenIdentity>, sqlx::Error> {
        sqlx::query_as::<_, TokenIdentity>(
            "UPDATE api_tokens t SET last_used_at = NOW()
             FROM users u
             WHERE t.token_hash = $1 AND u.id = t.user_id
             RETURNING t.id AS token_id, u.id AS user_id, u.name, u.email, u.role",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Delete the token row matching the presented hash (logout of this
    /// session only). Returns `true` if a row was removed.
    pub async fn revoke_by_hash(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM api_tokens WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count live tokens for a user. Test helper for revocation coverage.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
