//! Handlers for the `/performance` resource (club-wide reporting).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use ikilen_core::error::CoreError;
use ikilen_core::performance::{clamp_monthly_limit, validate_group_snapshot, validate_month};
use ikilen_db::models::performance::{
    CreateGroupPerformance, CreateMonthlyPerformance, GroupPerformance, MonthlyPerformance,
};
use ikilen_db::repositories::{GroupPerformanceRepo, MonthlyPerformanceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/performance/group
///
/// The latest snapshot, or `{ "data": null }` if none exists yet.
pub async fn latest_group_performance(
    State(state): State<AppState>,
    _auth: AuthMember,
) -> AppResult<Json<DataResponse<Option<GroupPerformance>>>> {
    let snapshot = GroupPerformanceRepo::latest(&state.pool).await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/performance/group
pub async fn record_group_performance(
    State(state): State<AppState>,
    auth: AuthMember,
    payload: Result<Json<CreateGroupPerformance>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<GroupPerformance>>)> {
    let Json(input) = payload?;
    validate_group_snapshot(input.total_members, input.total_assets, input.active_investments)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let snapshot = GroupPerformanceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        snapshot_id = snapshot.id,
        recorded_by = auth.member_id,
        "Group performance recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: snapshot })))
}

/// GET /api/v1/performance/monthly?limit=
///
/// Most recent months first. `limit` defaults to 6.
pub async fn monthly_performance(
    State(state): State<AppState>,
    _auth: AuthMember,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<MonthlyPerformance>>>> {
    let limit = clamp_monthly_limit(params.limit);
    let points = MonthlyPerformanceRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: points }))
}

/// POST /api/v1/performance/monthly
///
/// One data point per (year, month); a duplicate is a 409.
pub async fn add_monthly_performance(
    State(state): State<AppState>,
    auth: AuthMember,
    payload: Result<Json<CreateMonthlyPerformance>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<MonthlyPerformance>>)> {
    let Json(input) = payload?;
    validate_month(&input.month).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if !input.return_percentage.is_finite() {
        return Err(AppError::Core(CoreError::Validation(
            "Return percentage must be a finite number".into(),
        )));
    }

    let point = MonthlyPerformanceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        month = %point.month,
        year = point.year,
        recorded_by = auth.member_id,
        "Monthly performance recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: point })))
}
