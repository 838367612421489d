//! Repository for the `investments` table.

use sqlx::PgPool;
use ikilen_core::types::DbId;

use crate::models::investment::{CreateInvestment, Investment};

const COLUMNS: &str = "id, name, description, total_amount, return_rate, start_date, end_date, \
                        active, activated_at, proposed_by, created_at, updated_at";

/// Provides create/read operations and the one-way activation write.
pub struct InvestmentRepo;

impl InvestmentRepo {
    /// Insert a new proposal. The row is always created pending (`active = false`).
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvestment,
        proposed_by: Option<DbId>,
    ) -> Result<Investment, sqlx::Error> {
        let query = format!(
            "INSERT INTO investments
                (name, description, total_amount, return_rate, start_date, end_date, active, proposed_by)
             VALUES ($1, $2, $3, $4, $5, $6, false, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Investment>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(input.total_amount)
            .bind(input.return_rate)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(proposed_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Investment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investments WHERE id = $1");
        sqlx::query_as::<_, Investment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List investments newest first, optionally filtered by `active`.
    pub async fn list(
        pool: &PgPool,
        active: Option<bool>,
    ) -> Result<Vec<Investment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM investments
             WHERE ($1::BOOLEAN IS NULL OR active = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Investment>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// Flip a pending investment to active.
    ///
    /// The `active = false` guard makes this a compare-and-set: when several
    /// evaluations race, exactly one call returns `true` and the rest are
    /// no-ops returning `false`. Never writes `active = false`.
    pub async fn activate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE investments SET active = true, activated_at = NOW()
             WHERE id = $1 AND active = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
