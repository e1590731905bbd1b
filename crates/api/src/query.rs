//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for the spot listing (`?size=&page=`).
///
/// `size` defaults to 10 and is capped in the repository layer.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub size: Option<i64>,
    pub page: Option<i64>,
}
