//! Repository for the `investment_votes` table.

use sqlx::PgPool;
use ikilen_core::types::DbId;
use ikilen_core::voting::VoteTally;

use crate::models::vote::{InvestmentVote, VoteWithVoter};

const COLUMNS: &str = "id, investment_id, voter_id, approve, created_at, updated_at";

/// Vote storage keyed by the `(investment_id, voter_id)` unique constraint.
pub struct VoteRepo;

impl VoteRepo {
    /// Create or overwrite a member's vote on an investment.
    ///
    /// A single `INSERT ... ON CONFLICT` statement, so concurrent
    /// resubmissions from the same member serialize on the unique
    /// constraint and can never produce two rows.
    pub async fn upsert(
        pool: &PgPool,
        investment_id: DbId,
        voter_id: DbId,
        approve: bool,
    ) -> Result<InvestmentVote, sqlx::Error> {
        let query = format!(
            "INSERT INTO investment_votes (investment_id, voter_id, approve)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_investment_votes_investment_voter
             DO UPDATE SET approve = EXCLUDED.approve
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InvestmentVote>(&query)
            .bind(investment_id)
            .bind(voter_id)
            .bind(approve)
            .fetch_one(pool)
            .await
    }

    /// The vote a member cast on an investment, if any.
    pub async fn find_for_voter(
        pool: &PgPool,
        investment_id: DbId,
        voter_id: DbId,
    ) -> Result<Option<InvestmentVote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM investment_votes
             WHERE investment_id = $1 AND voter_id = $2"
        );
        sqlx::query_as::<_, InvestmentVote>(&query)
            .bind(investment_id)
            .bind(voter_id)
            .fetch_optional(pool)
            .await
    }

    /// All votes on an investment with the voter's display name, in insertion order.
    pub async fn list_for_investment(
        pool: &PgPool,
        investment_id: DbId,
    ) -> Result<Vec<VoteWithVoter>, sqlx::Error> {
        sqlx::query_as::<_, VoteWithVoter>(
            "SELECT v.id, v.investment_id, v.voter_id, v.approve, v.created_at, v.updated_at,
                    m.first_name, m.last_name
             FROM investment_votes v
             LEFT JOIN members m ON m.id = v.voter_id
             WHERE v.investment_id = $1
             ORDER BY v.id ASC",
        )
        .bind(investment_id)
        .fetch_all(pool)
        .await
    }

    /// Count yes and no votes on an investment in one consistent read.
    ///
    /// Only votes from currently active members are counted, so the tally
    /// and [`MemberRepo::count_eligible`](super::MemberRepo::count_eligible)
    /// describe the same population.
    pub async fn tally(pool: &PgPool, investment_id: DbId) -> Result<VoteTally, sqlx::Error> {
        let (yes_votes, no_votes): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE v.approve),
                    COUNT(*) FILTER (WHERE NOT v.approve)
             FROM investment_votes v
             JOIN members m ON m.id = v.voter_id
             WHERE v.investment_id = $1 AND m.is_active",
        )
        .bind(investment_id)
        .fetch_one(pool)
        .await?;
        Ok(VoteTally {
            yes_votes,
            no_votes,
        })
    }
}
