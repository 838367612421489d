//! Repository for the `transactions` table (member ledger).

use sqlx::PgPool;
use ikilen_core::ledger::KIND_CONTRIBUTION;
use ikilen_core::types::DbId;

use crate::models::transaction::{BalanceSummary, CreateTransaction, Transaction};

const COLUMNS: &str =
    "id, member_id, amount, kind, occurred_at, note, payment_method, created_at";

/// Ledger writes and aggregates.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Record a transaction for a member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        member_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (member_id, amount, kind, occurred_at, note, payment_method)
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(member_id)
            .bind(input.amount)
            .bind(&input.kind)
            .bind(input.occurred_at)
            .bind(&input.note)
            .bind(&input.payment_method)
            .fetch_one(pool)
            .await
    }

    /// A member's transactions, newest first. `limit = None` returns all.
    pub async fn list_for_member(
        pool: &PgPool,
        member_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE member_id = $1
             ORDER BY occurred_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(member_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// A member's contributions, newest first, optionally restricted to a calendar year (UTC).
    pub async fn contributions_for_member(
        pool: &PgPool,
        member_id: DbId,
        year: Option<i32>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE member_id = $1
               AND kind = $2
               AND ($3::INTEGER IS NULL
                    OR EXTRACT(YEAR FROM occurred_at AT TIME ZONE 'UTC')::INTEGER = $3)
             ORDER BY occurred_at DESC, id DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(member_id)
            .bind(KIND_CONTRIBUTION)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Balance, total contributions, and total earnings for a member.
    ///
    /// Members with no transactions get all zeros.
    pub async fn balance_summary(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<BalanceSummary, sqlx::Error> {
        sqlx::query_as::<_, BalanceSummary>(
            "SELECT
                COALESCE(SUM(CASE WHEN kind IN ('contribution', 'dividend')
                                  THEN amount ELSE -amount END), 0)::DOUBLE PRECISION
                    AS balance,
                COALESCE(SUM(amount) FILTER (WHERE kind = 'contribution'), 0)::DOUBLE PRECISION
                    AS total_contributions,
                COALESCE(SUM(amount) FILTER (WHERE kind = 'dividend'), 0)::DOUBLE PRECISION
                    AS total_earnings
             FROM transactions
             WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_one(pool)
        .await
    }
}
