//! Investment vote models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};

/// A row from the `investment_votes` table. At most one per (investment, voter).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvestmentVote {
    pub id: DbId,
    pub investment_id: DbId,
    pub voter_id: DbId,
    pub approve: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A vote joined with the voter's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoteWithVoter {
    pub id: DbId,
    pub investment_id: DbId,
    pub voter_id: DbId,
    pub approve: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /investments/{id}/vote`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitVoteRequest {
    pub approve: bool,
}
