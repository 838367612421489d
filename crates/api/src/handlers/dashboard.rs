//! Handler for the member dashboard.

use axum::extract::State;
use axum::Json;
use ikilen_core::error::CoreError;
use ikilen_core::ledger::DASHBOARD_RECENT_TRANSACTIONS;
use ikilen_core::performance::DEFAULT_MONTHLY_LIMIT;
use ikilen_db::models::member::MemberResponse;
use ikilen_db::models::performance::{GroupPerformance, MonthlyPerformance};
use ikilen_db::models::transaction::Transaction;
use ikilen_db::repositories::{
    GroupPerformanceRepo, MemberRepo, MonthlyPerformanceRepo, TransactionRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub member: MemberResponse,
    pub balance: f64,
    pub total_contributions: f64,
    pub total_earnings: f64,
    pub recent_transactions: Vec<Transaction>,
    /// `null` until a snapshot has been recorded.
    pub group_performance: Option<GroupPerformance>,
    pub monthly_performance: Vec<MonthlyPerformance>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthMember,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let member = MemberRepo::find_by_id(&state.pool, auth.member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: auth.member_id,
        }))?;

    let summary = TransactionRepo::balance_summary(&state.pool, member.id).await?;
    let recent_transactions = TransactionRepo::list_for_member(
        &state.pool,
        member.id,
        Some(DASHBOARD_RECENT_TRANSACTIONS),
    )
    .await?;
    let group_performance = GroupPerformanceRepo::latest(&state.pool).await?;
    let monthly_performance =
        MonthlyPerformanceRepo::list_recent(&state.pool, DEFAULT_MONTHLY_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardResponse {
            member: MemberResponse::from(&member),
            balance: summary.balance,
            total_contributions: summary.total_contributions,
            total_earnings: summary.total_earnings,
            recent_transactions,
            group_performance,
            monthly_performance,
        },
    }))
}
