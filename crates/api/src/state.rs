use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::voting::VotingEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and engine are handles, the rest is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: ikilen_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub event_bus: Arc<ikilen_events::EventBus>,
    /// Vote recording and investment activation.
    pub voting: VotingEngine,
}

impl AppState {
    /// Assemble state, building the voting engine from the config's quorum.
    pub fn new(
        pool: ikilen_db::DbPool,
        config: Arc<ServerConfig>,
        event_bus: Arc<ikilen_events::EventBus>,
    ) -> Self {
        let voting = VotingEngine::new(
            pool.clone(),
            Arc::clone(&event_bus),
            config.voting.approval_percent,
        );
        Self {
            pool,
            config,
            event_bus,
            voting,
        }
    }
}
