//! Repository for the `reviews` table.

use sqlx::PgPool;
use spotlog_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewAuthorRow, ReviewWithAuthor};

const COLUMNS: &str = "id, spot_id, user_id, rating, comment, created_at, updated_at";

/// Inserts reviews and loads them with author info for the spot detail view.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (spot_id, user_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.spot_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// All reviews for a spot, each joined with its author's name.
    pub async fn list_with_authors(
        pool: &PgPool,
        spot_id: DbId,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ReviewAuthorRow>(
            "SELECT r.id, r.spot_id, r.user_id, r.rating, r.comment, r.created_at,
                    u.name AS author_name
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.spot_id = $1
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(spot_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(ReviewWithAuthor::from).collect())
    }
}
