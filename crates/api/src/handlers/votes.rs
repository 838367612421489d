//! Handlers for voting on an investment (`/investments/{id}/...`).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use ikilen_core::types::DbId;
use ikilen_db::models::vote::{InvestmentVote, SubmitVoteRequest, VoteWithVoter};

use crate::engine::voting::{ActivationOutcome, VoteSubmission};
use crate::error::AppResult;
use crate::middleware::auth::AuthMember;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/investments/{id}/vote
///
/// Cast or change the caller's vote. The response carries the stored vote
/// and the outcome of the activation check that follows it. A failed check
/// does not fail the request; it reports `"status": "deferred"`.
pub async fn submit_vote(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(investment_id): Path<DbId>,
    payload: Result<Json<SubmitVoteRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<VoteSubmission>>> {
    let Json(input) = payload?;
    let submission = state
        .voting
        .submit_vote(investment_id, auth.member_id, input.approve)
        .await?;
    Ok(Json(DataResponse { data: submission }))
}

/// GET /api/v1/investments/{id}/votes
pub async fn list_votes(
    State(state): State<AppState>,
    _auth: AuthMember,
    Path(investment_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VoteWithVoter>>>> {
    let votes = state.voting.get_votes(investment_id).await?;
    Ok(Json(DataResponse { data: votes }))
}

/// GET /api/v1/investments/{id}/my-vote
///
/// `{ "data": null }` when the caller has not voted.
pub async fn my_vote(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(investment_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<InvestmentVote>>>> {
    let vote = state
        .voting
        .get_vote_for_member(investment_id, auth.member_id)
        .await?;
    Ok(Json(DataResponse { data: vote }))
}

/// POST /api/v1/investments/{id}/evaluate
///
/// Re-run the activation check on demand.
pub async fn evaluate(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(investment_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ActivationOutcome>>> {
    let outcome = state.voting.evaluate_activation(investment_id).await?;
    tracing::info!(investment_id, requested_by = auth.member_id, ?outcome, "Manual activation check");
    Ok(Json(DataResponse { data: outcome }))
}
