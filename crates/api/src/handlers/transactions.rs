//! Handlers for the `/transactions` resource (the caller's own ledger).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ikilen_core::error::CoreError;
use ikilen_core::ledger::{validate_amount, validate_kind};
use ikilen_db::models::transaction::{CreateTransaction, Transaction};
use ikilen_db::repositories::TransactionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthMember,
) -> AppResult<Json<DataResponse<Vec<Transaction>>>> {
    let transactions = TransactionRepo::list_for_member(&state.pool, auth.member_id, None).await?;
    Ok(Json(DataResponse { data: transactions }))
}

/// POST /api/v1/transactions
///
/// Record a contribution, dividend, withdrawal, or fee for the caller.
pub async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthMember,
    payload: Result<Json<CreateTransaction>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Transaction>>)> {
    let Json(input) = payload?;
    validate_kind(&input.kind)
        .and_then(|_| validate_amount(input.amount))
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let transaction = TransactionRepo::create(&state.pool, auth.member_id, &input).await?;

    tracing::info!(
        member_id = auth.member_id,
        transaction_id = transaction.id,
        kind = %transaction.kind,
        amount = transaction.amount,
        "Transaction recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: transaction })))
}
