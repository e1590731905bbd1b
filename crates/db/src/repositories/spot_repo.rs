//! Repository for the `spots` and `categories` tables.
//!
//! Category rows are a projection of a spot's submitted label list, so they
//! are only ever written here, inside the same transaction as the spot row.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use spotlog_core::types::DbId;

use crate::models::page::Page;
use crate::models::spot::{
    CreateSpot, Spot, SpotAggregateRow, SpotDetail, SpotSummary, UpdateSpot,
};
use crate::repositories::ReviewRepo;

/// Column list for bare `spots` queries.
const COLUMNS: &str = "id, user_id, name, address, picture, deleted_at, created_at, updated_at";

/// Spot columns plus owner name and review aggregates, for the eager-loaded
/// list and detail queries.
const AGGREGATE_COLUMNS: &str = "\
    s.id, s.user_id, s.name, s.address, s.picture, s.created_at, s.updated_at, \
    u.name AS owner_name, \
    (SELECT COUNT(*) FROM reviews r WHERE r.spot_id = s.id) AS reviews_count, \
    (SELECT SUM(r.rating) FROM reviews r WHERE r.spot_id = s.id) AS reviews_sum_rating";

/// Default page size when the client sends no `size` parameter.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Server-side cap on the client-controlled page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Provides CRUD operations for spots and their category projections.
pub struct SpotRepo;

impl SpotRepo {
    /// One page of spots with owner, categories, and review aggregates,
    /// newest first. Excludes soft-deleted rows.
    pub async fn list_page(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<SpotSummary>, sqlx::Error> {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let page = page.max(1);
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM spots WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {AGGREGATE_COLUMNS}
             FROM spots s
             JOIN users u ON u.id = s.user_id
             WHERE s.deleted_at IS NULL
             ORDER BY s.created_at DESC, s.id DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, SpotAggregateRow>(&query)
            .bind(per_page)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut categories = Self::categories_by_spot(pool, &ids).await?;

        let items = rows
            .into_iter()
            .map(|row| {
                let labels = categories.remove(&row.id).unwrap_or_default();
                SpotSummary::from_row(row, labels)
            })
            .collect();

        Ok(Page::new(items, page, per_page, total))
    }

    /// The detail view for one spot: summary shape plus its reviews, each
    /// with author id/name. `None` if absent or soft-deleted.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<SpotDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {AGGREGATE_COLUMNS}
             FROM spots s
             JOIN users u ON u.id = s.user_id
             WHERE s.id = $1 AND s.deleted_at IS NULL"
        );
        let Some(row) = sqlx::query_as::<_, SpotAggregateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let labels = Self::categories_for(pool, id).await?;
        let reviews = ReviewRepo::list_with_authors(pool, id).await?;

        Ok(Some(SpotDetail {
            summary: SpotSummary::from_row(row, labels),
            reviews,
        }))
    }

    /// Find a bare spot row by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Spot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spots WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Spot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a spot and bulk-insert one category row per label, atomically.
    ///
    /// A failure anywhere in the sequence rolls back the whole write, so a
    /// spot can never exist without its categories.
    pub async fn create(pool: &PgPool, input: &CreateSpot) -> Result<Spot, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO spots (user_id, name, address, picture)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let spot = sqlx::query_as::<_, Spot>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.picture)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_categories(&mut tx, spot.id, &input.categories).await?;

        tx.commit().await?;
        Ok(spot)
    }

    /// Update a spot. Name and address are overwritten unconditionally;
    /// picture only when a new path is supplied. When `categories` is
    /// present, the spot's category rows are fully replaced in the same
    /// transaction.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSpot,
    ) -> Result<Option<Spot>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE spots SET
                name = $2,
                address = $3,
                picture = COALESCE($4, picture),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let Some(spot) = sqlx::query_as::<_, Spot>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.picture)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(labels) = &input.categories {
            sqlx::query("DELETE FROM categories WHERE spot_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_categories(&mut tx, id, labels).await?;
        }

        tx.commit().await?;
        Ok(Some(spot))
    }

    /// Soft-delete a spot by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE spots SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Category labels for one spot, in insertion order.
    pub async fn categories_for(pool: &PgPool, spot_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT category FROM categories WHERE spot_id = $1 ORDER BY id")
            .bind(spot_id)
            .fetch_all(pool)
            .await
    }

    /// Category labels grouped by spot, for assembling a page in one query.
    async fn categories_by_spot(
        pool: &PgPool,
        spot_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        if spot_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT spot_id, category FROM categories WHERE spot_id = ANY($1) ORDER BY id",
        )
        .bind(spot_ids)
        .fetch_all(pool)
        .await?;

        let mut grouped: HashMap<DbId, Vec<String>> = HashMap::new();
        for (spot_id, label) in rows {
            grouped.entry(spot_id).or_default().push(label);
        }
        Ok(grouped)
    }

    /// Bulk-insert category rows for a spot inside an open transaction.
    async fn insert_categories(
        tx: &mut Transaction<'_, Postgres>,
        spot_id: DbId,
        labels: &[String],
    ) -> Result<(), sqlx::Error> {
        if labels.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO categories (spot_id, category)
             SELECT $1, t.label FROM UNNEST($2::text[]) AS t(label)",
        )
        .bind(spot_id)
        .bind(labels)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
