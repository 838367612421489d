//! Route definitions for the `/performance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::performance;
use crate::state::AppState;

/// Routes mounted at `/performance`.
///
/// ```text
/// GET  /group     -> latest_group_performance
/// POST /group     -> record_group_performance
/// GET  /monthly   -> monthly_performance (?limit=)
/// POST /monthly   -> add_monthly_performance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/group",
            get(performance::latest_group_performance)
                .post(performance::record_group_performance),
        )
        .route(
            "/monthly",
            get(performance::monthly_performance).post(performance::add_monthly_performance),
        )
}
