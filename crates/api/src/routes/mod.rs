pub mod auth;
pub mod dashboard;
pub mod health;
pub mod investments;
pub mod members;
pub mod performance;
pub mod transactions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
/// /auth/me                               current member
///
/// /members                               list
/// /members/{id}/contributions            contribution history (?year=)
///
/// /transactions                          list own, record (GET, POST)
///
/// /dashboard                             member dashboard
///
/// /investments                           list (?active=), propose (GET, POST)
/// /investments/{id}                      detail with vote summary
/// /investments/{id}/vote                 cast or change vote (POST)
/// /investments/{id}/votes                all votes
/// /investments/{id}/my-vote              caller's vote or null
/// /investments/{id}/evaluate             re-run activation check (POST)
///
/// /performance/group                     latest snapshot, record (GET, POST)
/// /performance/monthly                   recent months (?limit=), add (GET, POST)
/// ```
///
/// Everything outside `/auth` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/members", members::router())
        .nest("/transactions", transactions::router())
        .nest("/dashboard", dashboard::router())
        .nest("/investments", investments::router())
        .nest("/performance", performance::router())
}
