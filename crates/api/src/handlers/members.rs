//! Handlers for the `/members` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use ikilen_core::error::CoreError;
use ikilen_core::types::DbId;
use ikilen_db::models::member::MemberResponse;
use ikilen_db::models::transaction::Transaction;
use ikilen_db::repositories::{MemberRepo, TransactionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::query::YearParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/members
///
/// All members ordered by first name, then last name.
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthMember,
) -> AppResult<Json<DataResponse<Vec<MemberResponse>>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: members.iter().map(MemberResponse::from).collect(),
    }))
}

/// GET /api/v1/members/{id}/contributions?year=
///
/// A member's contribution transactions, newest first. `year` restricts
/// the list to one calendar year.
pub async fn member_contributions(
    State(state): State<AppState>,
    _auth: AuthMember,
    Path(member_id): Path<DbId>,
    Query(params): Query<YearParams>,
) -> AppResult<Json<DataResponse<Vec<Transaction>>>> {
    MemberRepo::find_by_id(&state.pool, member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: member_id,
        }))?;

    let contributions =
        TransactionRepo::contributions_for_member(&state.pool, member_id, params.year).await?;
    Ok(Json(DataResponse {
        data: contributions,
    }))
}
