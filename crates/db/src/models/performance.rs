//! Club performance models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ikilen_core::types::{DbId, Timestamp};

/// A row from the `group_performance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupPerformance {
    pub id: DbId,
    pub total_members: i32,
    pub total_assets: f64,
    pub active_investments: i32,
    pub ytd_returns: f64,
    pub recorded_at: Timestamp,
}

/// DTO for recording a group performance snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupPerformance {
    pub total_members: i32,
    pub total_assets: f64,
    pub active_investments: i32,
    pub ytd_returns: f64,
}

/// A row from the `monthly_performance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyPerformance {
    pub id: DbId,
    pub month: String,
    pub year: i32,
    pub return_percentage: f64,
}

/// DTO for adding a monthly return data point.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMonthlyPerformance {
    pub month: String,
    pub year: i32,
    pub return_percentage: f64,
}
