//! Investment proposal model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};
use ikilen_core::voting::InvestmentStatus;

/// A row from the `investments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Investment {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub total_amount: f64,
    pub return_rate: f64,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub active: bool,
    pub activated_at: Option<Timestamp>,
    pub proposed_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Investment {
    pub fn status(&self) -> InvestmentStatus {
        InvestmentStatus::from_active(self.active)
    }
}

/// DTO for proposing a new investment.
///
/// There is deliberately no `active` field: every proposal starts pending
/// and any `active` value in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvestment {
    pub name: String,
    pub description: Option<String>,
    pub total_amount: f64,
    pub return_rate: f64,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
}
