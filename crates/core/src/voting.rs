//! Quorum arithmetic for investment proposals.
//!
//! An investment moves from [`InvestmentStatus::Pending`] to
//! [`InvestmentStatus::Active`] once the number of approving votes reaches
//! a fixed percentage of *all* eligible members. Members who never vote
//! count against activation. The transition is one-way: nothing here can
//! produce a decision that deactivates an investment.

use serde::Serialize;

/// Default approval quorum, as a percentage of eligible members.
pub const DEFAULT_APPROVAL_PERCENT: u8 = 80;

/// Lifecycle state of an investment proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Pending,
    Active,
}

impl InvestmentStatus {
    /// Map the persisted `active` flag to a status.
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Pending
        }
    }
}

/// Yes/no vote counts for one investment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub yes_votes: i64,
    pub no_votes: i64,
}

/// What an activation check concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationDecision {
    /// The quorum is met and the investment is still pending.
    Activate,
    /// The investment is already active; nothing to do.
    AlreadyActive,
    /// Not enough approvals yet.
    Insufficient { yes_votes: i64, required: i64 },
}

/// Validate a configured approval percentage.
pub fn validate_approval_percent(percent: u8) -> Result<(), String> {
    if (1..=100).contains(&percent) {
        Ok(())
    } else {
        Err(format!(
            "Approval percentage must be between 1 and 100, got {percent}"
        ))
    }
}

/// Number of approving votes needed to activate an investment.
///
/// Computes `ceil(percent * eligible_members / 100)` in integer arithmetic,
/// floored at 1 so an empty membership never activates anything.
pub fn required_approvals(eligible_members: i64, percent: u8) -> i64 {
    let members = eligible_members.max(0);
    let scaled = members * i64::from(percent);
    let required = (scaled + 99) / 100;
    required.max(1)
}

/// Decide whether an investment should be activated.
pub fn decide_activation(
    already_active: bool,
    tally: VoteTally,
    eligible_members: i64,
    percent: u8,
) -> ActivationDecision {
    if already_active {
        return ActivationDecision::AlreadyActive;
    }

    let required = required_approvals(eligible_members, percent);
    if tally.yes_votes >= required {
        ActivationDecision::Activate
    } else {
        ActivationDecision::Insufficient {
            yes_votes: tally.yes_votes,
            required,
        }
    }
}
