//! Spot entity model, DTOs, and the eager-loaded read shapes returned by
//! the list and detail queries.

use serde::Serialize;
use spotlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::review::ReviewWithAuthor;

/// A bare row from the `spots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Spot {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub address: String,
    /// Relative stored-file path under the storage root, e.g. `spots/<uuid>.jpg`.
    pub picture: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Owner info embedded in eager-loaded spot responses.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerInfo {
    pub id: DbId,
    pub name: String,
}

/// Internal flat row produced by the list/detail queries: spot columns plus
/// the owner's name and the review aggregates.
#[derive(Debug, FromRow)]
pub struct SpotAggregateRow {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub address: String,
    pub picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub owner_name: String,
    pub reviews_count: i64,
    /// `NULL` when the spot has no reviews, matching SQL `SUM` semantics.
    pub reviews_sum_rating: Option<i64>,
}

/// A spot as it appears in the paginated listing: row + owner + category
/// labels + review aggregates.
#[derive(Debug, Serialize)]
pub struct SpotSummary {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub address: String,
    pub picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user: OwnerInfo,
    pub categories: Vec<String>,
    pub reviews_count: i64,
    pub reviews_sum_rating: Option<i64>,
}

impl SpotSummary {
    pub fn from_row(row: SpotAggregateRow, categories: Vec<String>) -> Self {
        SpotSummary {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            address: row.address,
            picture: row.picture,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user: OwnerInfo {
                id: row.user_id,
                name: row.owner_name,
            },
            categories,
            reviews_count: row.reviews_count,
            reviews_sum_rating: row.reviews_sum_rating,
        }
    }
}

/// The detail view: everything in [`SpotSummary`] plus the reviews
/// themselves, each with its author's id and name.
#[derive(Debug, Serialize)]
pub struct SpotDetail {
    #[serde(flatten)]
    pub summary: SpotSummary,
    pub reviews: Vec<ReviewWithAuthor>,
}

/// DTO for creating a spot together with its category labels.
#[derive(Debug)]
pub struct CreateSpot {
    pub user_id: DbId,
    pub name: String,
    pub address: String,
    pub picture: String,
    pub categories: Vec<String>,
}

/// DTO for updating a spot.
///
/// `name` and `address` are overwritten unconditionally. `picture` replaces
/// the stored path only when a new file was uploaded. `categories`, when
/// present, triggers a full replace of the spot's category rows.
#[derive(Debug)]
pub struct UpdateSpot {
    pub name: String,
    pub address: String,
    pub picture: Option<String>,
    pub categories: Option<Vec<String>>,
}
