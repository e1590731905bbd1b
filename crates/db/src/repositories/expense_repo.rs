//! Repository for the `expenses` table.

use sqlx::PgPool;
use spotlog_core::types::DbId;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

const COLUMNS: &str = "id, description, amount, date, category, created_at, updated_at";

/// Provides CRUD operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// All expenses ordered by date descending (newest spending first).
    pub async fn list(pool: &PgPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// Insert a new expense, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (description, amount, date, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.date)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find an expense by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = $1");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an expense. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                description = COALESCE($2, description),
                amount = COALESCE($3, amount),
                date = COALESCE($4, date),
                category = COALESCE($5, category),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.date)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an expense by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
