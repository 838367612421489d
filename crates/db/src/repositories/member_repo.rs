//! Repository for the `members` table.
//!
//! Also serves as the member directory for quorum checks: only active
//! members are eligible to vote and count toward the approval threshold.

use sqlx::PgPool;
use ikilen_core::types::DbId;

use crate::models::member::{CreateMember, Member};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                        is_active, last_login_at, created_at, updated_at";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (username, email, password_hash, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE username = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all members ordered by first name, then last name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY first_name, last_name, id");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Number of members eligible to vote (active accounts).
    pub async fn count_eligible(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members WHERE is_active")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Soft-deactivate a member by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE members SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp `last_login_at` with the current time.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE members SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
