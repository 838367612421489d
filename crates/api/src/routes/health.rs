//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Live event-bus subscribers; the activation retrier is one of them.
    pub event_subscribers: usize,
    pub approval_threshold_percent: u8,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match ikilen_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        event_subscribers: state.event_bus.subscriber_count(),
        approval_threshold_percent: state.voting.approval_percent(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
