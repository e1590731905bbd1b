//! Handlers for the `/expenses` resource.
//!
//! Expenses are a flat, unauthenticated CRUD resource. Dates arrive as
//! `YYYY-MM-DD` strings and are parsed here so a malformed date yields a
//! 422 validation error rather than a deserialization failure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use spotlog_core::error::CoreError;
use spotlog_core::types::DbId;
use spotlog_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use spotlog_db::repositories::ExpenseRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /expenses`. All four fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
}

/// Request body for `PUT/PATCH /expenses/{id}`. Each field is optional but,
/// when present, must satisfy the same constraints as on create.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /expenses
///
/// All expenses ordered by date descending, as a plain JSON array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = ExpenseRepo::list(&state.pool).await?;
    Ok(Json(expenses))
}

/// POST /expenses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExpenseRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse<Expense>>)> {
    let create = CreateExpense {
        description: require_text("description", &input.description)?,
        amount: validate_amount(input.amount)?,
        date: parse_date(&input.date)?,
        category: require_text("category", &input.category)?,
    };

    let expense = ExpenseRepo::create(&state.pool, &create).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Expense created successfully", expense)),
    ))
}

/// GET /expenses/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Expense>> {
    let expense = ExpenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;
    Ok(Json(expense))
}

/// PUT/PATCH /expenses/{id}
///
/// Updates only the supplied fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpenseRequest>,
) -> AppResult<Json<MessageResponse<Expense>>> {
    let patch = UpdateExpense {
        description: input
            .description
            .as_deref()
            .map(|d| require_text("description", d))
            .transpose()?,
        amount: input.amount.map(validate_amount).transpose()?,
        date: input.date.as_deref().map(parse_date).transpose()?,
        category: input
            .category
            .as_deref()
            .map(|c| require_text("category", c))
            .transpose()?,
    };

    let expense = ExpenseRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;

    Ok(Json(MessageResponse::new(
        "Expense updated successfully",
        expense,
    )))
}

/// DELETE /expenses/{id}
///
/// Removes the row permanently. 204 with no body on success.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExpenseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: f64) -> Result<f64, AppError> {
    if !amount.is_finite() {
        return Err(AppError::Core(CoreError::Validation(
            "amount must be a finite number".into(),
        )));
    }
    Ok(amount)
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Core(CoreError::Validation(
            "date must be a valid calendar date (YYYY-MM-DD)".into(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("name", "  Lunch  ").unwrap(), "Lunch");
        assert!(require_text("name", "   ").is_err());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024-01-10").is_ok());
        assert!(parse_date("2024-13-40").is_err());
        assert!(parse_date("next tuesday").is_err());
    }

    #[test]
    fn test_amount_must_be_finite() {
        assert!(validate_amount(15.5).is_ok());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
