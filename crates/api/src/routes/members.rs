//! Route definitions for the `/members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// GET /                     -> list_members
/// GET /{id}/contributions   -> member_contributions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list_members))
        .route("/{id}/contributions", get(members::member_contributions))
}
