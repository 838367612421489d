//! Investment voting and activation engine.
//!
//! Recording a vote is a two-step pipeline:
//!
//! 1. Upsert the member's vote. This is the only step whose failure fails
//!    the request.
//! 2. Re-check the approval quorum and flip the investment to active when
//!    it is met. This step is best-effort: if it fails, the vote still
//!    stands, the outcome is reported as [`ActivationOutcome::Deferred`],
//!    and an `investment.activation_deferred` event hands the check to the
//!    background retrier.
//!
//! Activation is monotone. The engine never writes `active = false`, and
//! the write itself is a compare-and-set, so concurrent or repeated
//! evaluations are harmless.

use std::sync::Arc;

use serde::Serialize;
use sqlx::PgPool;
use ikilen_core::error::CoreError;
use ikilen_core::types::DbId;
use ikilen_core::voting::{
    decide_activation, required_approvals, ActivationDecision, InvestmentStatus,
};
use ikilen_db::models::investment::Investment;
use ikilen_db::models::vote::{InvestmentVote, VoteWithVoter};
use ikilen_db::repositories::{InvestmentRepo, MemberRepo, VoteRepo};
use ikilen_events::{names, EventBus, PlatformEvent};

use crate::error::{AppError, AppResult};

/// Result of an activation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// This check moved the investment from pending to active.
    Activated { yes_votes: i64, required: i64 },
    /// The investment was already active (possibly activated concurrently).
    AlreadyActive,
    /// Quorum not reached yet.
    Pending { yes_votes: i64, required: i64 },
    /// The check failed and was queued for retry.
    Deferred,
}

/// A committed vote plus what the follow-up activation check concluded.
#[derive(Debug, Clone, Serialize)]
pub struct VoteSubmission {
    pub vote: InvestmentVote,
    pub activation: ActivationOutcome,
}

/// Current standing of an investment's vote.
#[derive(Debug, Clone, Serialize)]
pub struct VoteSummary {
    pub status: InvestmentStatus,
    pub yes_votes: i64,
    pub no_votes: i64,
    pub eligible_members: i64,
    pub required_approvals: i64,
}

/// Voting engine handle. Cheap to clone.
#[derive(Clone)]
pub struct VotingEngine {
    pool: PgPool,
    event_bus: Arc<EventBus>,
    approval_percent: u8,
}

impl VotingEngine {
    pub fn new(pool: PgPool, event_bus: Arc<EventBus>, approval_percent: u8) -> Self {
        Self {
            pool,
            event_bus,
            approval_percent,
        }
    }

    pub fn approval_percent(&self) -> u8 {
        self.approval_percent
    }

    /// Record (or overwrite) a member's vote, then re-check activation.
    ///
    /// Votes on an already-active investment are accepted and stored; they
    /// cannot deactivate it.
    pub async fn submit_vote(
        &self,
        investment_id: DbId,
        voter_id: DbId,
        approve: bool,
    ) -> AppResult<VoteSubmission> {
        self.find_investment(investment_id).await?;

        let voter = MemberRepo::find_by_id(&self.pool, voter_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Member",
                id: voter_id,
            }))?;
        if !voter.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Deactivated members cannot vote".into(),
            )));
        }

        let vote = VoteRepo::upsert(&self.pool, investment_id, voter_id, approve).await?;

        tracing::info!(
            investment_id,
            voter_id,
            vote_id = vote.id,
            approve,
            "Vote recorded"
        );
        self.event_bus.publish(
            PlatformEvent::new(names::VOTE_RECORDED)
                .about("investment", investment_id)
                .by(voter_id)
                .with_payload(serde_json::json!({ "vote_id": vote.id, "approve": approve })),
        );

        let activation = match self.evaluate_activation(investment_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    investment_id,
                    error = %e,
                    "Activation check failed after vote; deferring"
                );
                self.defer(investment_id, 1);
                ActivationOutcome::Deferred
            }
        };

        Ok(VoteSubmission { vote, activation })
    }

    /// Check the quorum and activate the investment if it is met.
    ///
    /// Idempotent: with no vote changes in between, a second call reports
    /// the same pending tally or `AlreadyActive` and writes nothing.
    pub async fn evaluate_activation(&self, investment_id: DbId) -> AppResult<ActivationOutcome> {
        let investment = self.find_investment(investment_id).await?;
        if investment.active {
            return Ok(ActivationOutcome::AlreadyActive);
        }

        let eligible = MemberRepo::count_eligible(&self.pool).await?;
        let tally = VoteRepo::tally(&self.pool, investment_id).await?;

        match decide_activation(false, tally, eligible, self.approval_percent) {
            ActivationDecision::Activate => {
                let required = required_approvals(eligible, self.approval_percent);
                if !InvestmentRepo::activate(&self.pool, investment_id).await? {
                    // Another evaluation won the race.
                    return Ok(ActivationOutcome::AlreadyActive);
                }

                tracing::info!(
                    investment_id,
                    yes_votes = tally.yes_votes,
                    required,
                    eligible,
                    "Investment activated"
                );
                self.event_bus.publish(
                    PlatformEvent::new(names::INVESTMENT_ACTIVATED)
                        .about("investment", investment_id)
                        .with_payload(serde_json::json!({
                            "yes_votes": tally.yes_votes,
                            "required": required,
                            "eligible_members": eligible,
                        })),
                );
                Ok(ActivationOutcome::Activated {
                    yes_votes: tally.yes_votes,
                    required,
                })
            }
            ActivationDecision::AlreadyActive => Ok(ActivationOutcome::AlreadyActive),
            ActivationDecision::Insufficient {
                yes_votes,
                required,
            } => {
                tracing::debug!(investment_id, yes_votes, required, "Quorum not reached");
                Ok(ActivationOutcome::Pending {
                    yes_votes,
                    required,
                })
            }
        }
    }

    /// All votes on an investment with voter names.
    pub async fn get_votes(&self, investment_id: DbId) -> AppResult<Vec<VoteWithVoter>> {
        self.find_investment(investment_id).await?;
        Ok(VoteRepo::list_for_investment(&self.pool, investment_id).await?)
    }

    /// A member's vote on an investment. `None` means they have not voted.
    pub async fn get_vote_for_member(
        &self,
        investment_id: DbId,
        voter_id: DbId,
    ) -> AppResult<Option<InvestmentVote>> {
        self.find_investment(investment_id).await?;
        Ok(VoteRepo::find_for_voter(&self.pool, investment_id, voter_id).await?)
    }

    /// Tally, quorum, and status for an investment already loaded.
    pub async fn summarize(&self, investment: &Investment) -> AppResult<VoteSummary> {
        let eligible = MemberRepo::count_eligible(&self.pool).await?;
        let tally = VoteRepo::tally(&self.pool, investment.id).await?;
        Ok(VoteSummary {
            status: investment.status(),
            yes_votes: tally.yes_votes,
            no_votes: tally.no_votes,
            eligible_members: eligible,
            required_approvals: required_approvals(eligible, self.approval_percent),
        })
    }

    /// Queue an activation check for the background retrier.
    pub fn defer(&self, investment_id: DbId, attempt: u32) {
        self.event_bus.publish(
            PlatformEvent::new(names::ACTIVATION_DEFERRED)
                .about("investment", investment_id)
                .with_payload(serde_json::json!({ "attempt": attempt })),
        );
    }

    async fn find_investment(&self, id: DbId) -> AppResult<Investment> {
        InvestmentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Investment",
                id,
            }))
    }
}
