//! Member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};

/// Full member row from the `members` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`MemberResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe member representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            username: member.username.clone(),
            email: member.email.clone(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            is_active: member.is_active,
            last_login_at: member.last_login_at,
            created_at: member.created_at,
        }
    }
}

/// DTO for creating a new member. The password must already be hashed.
#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}
