//! Member ledger transaction models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub member_id: DbId,
    pub amount: f64,
    pub kind: String,
    pub occurred_at: Timestamp,
    pub note: Option<String>,
    pub payment_method: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording a transaction for the authenticated member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub amount: f64,
    pub kind: String,
    /// Defaults to now when omitted.
    pub occurred_at: Option<Timestamp>,
    pub note: Option<String>,
    pub payment_method: Option<String>,
}

/// Aggregated ledger figures for one member.
#[derive(Debug, Clone, Copy, Default, FromRow, Serialize, PartialEq)]
pub struct BalanceSummary {
    /// Contributions + dividends - withdrawals - fees.
    pub balance: f64,
    pub total_contributions: f64,
    /// Sum of dividends.
    pub total_earnings: f64,
}
