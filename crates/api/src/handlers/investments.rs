//! Handlers for the `/investments` catalogue.
//!
//! Voting on an investment lives in [`super::votes`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ikilen_core::error::CoreError;
use ikilen_core::investment::validate_proposal;
use ikilen_core::types::DbId;
use ikilen_db::models::investment::{CreateInvestment, Investment};
use ikilen_db::repositories::InvestmentRepo;
use ikilen_events::{names, PlatformEvent};
use serde::Serialize;

use crate::engine::voting::VoteSummary;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::query::ActiveFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// An investment together with its current vote standing.
#[derive(Debug, Serialize)]
pub struct InvestmentDetail {
    #[serde(flatten)]
    pub investment: Investment,
    pub votes: VoteSummary,
}

/// GET /api/v1/investments?active=
///
/// Newest first. `active=true` lists activated investments, `active=false`
/// the ones still awaiting approval.
pub async fn list_investments(
    State(state): State<AppState>,
    _auth: AuthMember,
    Query(params): Query<ActiveFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Investment>>>> {
    let investments = InvestmentRepo::list(&state.pool, params.active).await?;
    Ok(Json(DataResponse { data: investments }))
}

/// POST /api/v1/investments
///
/// Propose an investment. It always starts pending.
pub async fn create_investment(
    State(state): State<AppState>,
    auth: AuthMember,
    payload: Result<Json<CreateInvestment>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Investment>>)> {
    let Json(input) = payload?;
    validate_proposal(
        &input.name,
        input.total_amount,
        input.return_rate,
        input.start_date,
        input.end_date,
    )
    .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let investment = InvestmentRepo::create(&state.pool, &input, Some(auth.member_id)).await?;

    tracing::info!(
        investment_id = investment.id,
        proposed_by = auth.member_id,
        name = %investment.name,
        "Investment proposed"
    );
    state.event_bus.publish(
        PlatformEvent::new(names::INVESTMENT_CREATED)
            .about("investment", investment.id)
            .by(auth.member_id)
            .with_payload(serde_json::json!({ "name": investment.name })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: investment })))
}

/// GET /api/v1/investments/{id}
pub async fn get_investment(
    State(state): State<AppState>,
    _auth: AuthMember,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<InvestmentDetail>>> {
    let investment = InvestmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Investment",
            id,
        }))?;
    let votes = state.voting.summarize(&investment).await?;
    Ok(Json(DataResponse {
        data: InvestmentDetail { investment, votes },
    }))
}
