//! Member session model and DTOs.

use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};

/// A refresh-token session row from the `member_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct MemberSession {
    pub id: DbId,
    pub member_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub member_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
