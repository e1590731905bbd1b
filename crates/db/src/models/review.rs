//! Review entity model.
//!
//! Reviews have no HTTP endpoints of their own; they exist to be aggregated
//! (count, sum of rating) and eager-loaded on the spot detail view.

use serde::Serialize;
use spotlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::spot::OwnerInfo;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub spot_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a review.
#[derive(Debug)]
pub struct CreateReview {
    pub spot_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Internal flat row for the detail query (review joined with author name).
#[derive(Debug, FromRow)]
pub struct ReviewAuthorRow {
    pub id: DbId,
    pub spot_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub author_name: String,
}

/// A review with its author's id and name, as serialized on spot detail.
#[derive(Debug, Serialize)]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub spot_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub user: OwnerInfo,
}

impl From<ReviewAuthorRow> for ReviewWithAuthor {
    fn from(row: ReviewAuthorRow) -> Self {
        ReviewWithAuthor {
            id: row.id,
            spot_id: row.spot_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
            user: OwnerInfo {
                id: row.user_id,
                name: row.author_name,
            },
        }
    }
}
