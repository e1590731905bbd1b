//! Expense entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spotlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an expense. All four business fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
}

/// DTO for updating an expense. Only supplied fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}
