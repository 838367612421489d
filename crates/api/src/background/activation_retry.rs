//! Retries activation checks that failed right after a vote was stored.
//!
//! The voting engine publishes `investment.activation_deferred` when its
//! post-vote check errors. This task listens for those events, waits
//! `retry_delay`, and re-runs the check. A retry that fails again is
//! re-published with `attempt + 1` until `retry_max_attempts` is reached.

use ikilen_core::types::DbId;
use ikilen_events::{names, PlatformEvent};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::config::VotingConfig;
use crate::engine::voting::VotingEngine;

/// Run the retry loop until `cancel` fires or the bus closes.
pub async fn run(
    engine: VotingEngine,
    mut receiver: broadcast::Receiver<PlatformEvent>,
    config: VotingConfig,
    cancel: CancellationToken,
) {
    tracing::info!(
        max_attempts = config.retry_max_attempts,
        delay_secs = config.retry_delay.as_secs(),
        "Activation retrier started"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Activation retrier stopping");
                break;
            }
            received = receiver.recv() => match received {
                Ok(event) if event.event_type == names::ACTIVATION_DEFERRED => {
                    let Some((investment_id, attempt)) = deferred_check(&event) else {
                        tracing::warn!(?event, "Deferred activation event without investment id");
                        continue;
                    };
                    if attempt > config.retry_max_attempts {
                        tracing::error!(investment_id, attempt, "Activation retries exhausted");
                        continue;
                    }
                    tokio::spawn(retry(
                        engine.clone(),
                        investment_id,
                        attempt,
                        config.clone(),
                        cancel.clone(),
                    ));
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Activation retrier lagged; some deferred checks were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, activation retrier exiting");
                    break;
                }
            }
        }
    }
}

async fn retry(
    engine: VotingEngine,
    investment_id: DbId,
    attempt: u32,
    config: VotingConfig,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(config.retry_delay) => {}
    }

    match engine.evaluate_activation(investment_id).await {
        Ok(outcome) => {
            tracing::info!(investment_id, attempt, ?outcome, "Deferred activation check completed");
        }
        Err(e) if attempt < config.retry_max_attempts => {
            tracing::warn!(investment_id, attempt, error = %e, "Deferred activation check failed");
            engine.defer(investment_id, attempt + 1);
        }
        Err(e) => {
            tracing::error!(
                investment_id,
                attempt,
                error = %e,
                "Deferred activation check failed; giving up until the next vote"
            );
        }
    }
}

/// Investment id and attempt number carried by a deferred-check event.
fn deferred_check(event: &PlatformEvent) -> Option<(DbId, u32)> {
    if !event.is_about("investment") {
        return None;
    }
    let investment_id = event.entity_id?;
    let attempt = event
        .payload
        .get("attempt")
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(1);
    Some((investment_id, attempt))
}
