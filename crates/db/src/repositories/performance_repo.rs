//! Repositories for the `group_performance` and `monthly_performance` tables.

use sqlx::PgPool;

use crate::models::performance::{
    CreateGroupPerformance, CreateMonthlyPerformance, GroupPerformance, MonthlyPerformance,
};

const GROUP_COLUMNS: &str =
    "id, total_members, total_assets, active_investments, ytd_returns, recorded_at";

const MONTHLY_COLUMNS: &str = "id, month, year, return_percentage";

/// Club-wide performance snapshots.
pub struct GroupPerformanceRepo;

impl GroupPerformanceRepo {
    /// Append a new snapshot.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGroupPerformance,
    ) -> Result<GroupPerformance, sqlx::Error> {
        let query = format!(
            "INSERT INTO group_performance
                (total_members, total_assets, active_investments, ytd_returns)
             VALUES ($1, $2, $3, $4)
             RETURNING {GROUP_COLUMNS}"
        );
        sqlx::query_as::<_, GroupPerformance>(&query)
            .bind(input.total_members)
            .bind(input.total_assets)
            .bind(input.active_investments)
            .bind(input.ytd_returns)
            .fetch_one(pool)
            .await
    }

    /// The most recently recorded snapshot, if any.
    pub async fn latest(pool: &PgPool) -> Result<Option<GroupPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT {GROUP_COLUMNS} FROM group_performance
             ORDER BY recorded_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, GroupPerformance>(&query)
            .fetch_optional(pool)
            .await
    }
}

/// Monthly return series.
pub struct MonthlyPerformanceRepo;

impl MonthlyPerformanceRepo {
    /// Add a data point. `(year, month)` is unique.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMonthlyPerformance,
    ) -> Result<MonthlyPerformance, sqlx::Error> {
        let query = format!(
            "INSERT INTO monthly_performance (month, year, return_percentage)
             VALUES ($1, $2, $3)
             RETURNING {MONTHLY_COLUMNS}"
        );
        sqlx::query_as::<_, MonthlyPerformance>(&query)
            .bind(&input.month)
            .bind(input.year)
            .bind(input.return_percentage)
            .fetch_one(pool)
            .await
    }

    /// The most recent `limit` data points, latest calendar month first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<MonthlyPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT {MONTHLY_COLUMNS} FROM monthly_performance
             ORDER BY year DESC,
                      array_position(
                          ARRAY['Jan','Feb','Mar','Apr','May','Jun',
                                'Jul','Aug','Sep','Oct','Nov','Dec']::TEXT[],
                          month) DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, MonthlyPerformance>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
