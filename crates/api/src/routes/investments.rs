//! Route definitions for the `/investments` resource and its votes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{investments, votes};
use crate::state::AppState;

/// Routes mounted at `/investments`.
///
/// ```text
/// GET  /                 -> list_investments (?active=)
/// POST /                 -> create_investment
/// GET  /{id}             -> get_investment
/// POST /{id}/vote        -> submit_vote
/// GET  /{id}/votes       -> list_votes
/// GET  /{id}/my-vote     -> my_vote
/// POST /{id}/evaluate    -> evaluate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(investments::list_investments).post(investments::create_investment),
        )
        .route("/{id}", get(investments::get_investment))
        .route("/{id}/vote", post(votes::submit_vote))
        .route("/{id}/votes", get(votes::list_votes))
        .route("/{id}/my-vote", get(votes::my_vote))
        .route("/{id}/evaluate", post(votes::evaluate))
}
