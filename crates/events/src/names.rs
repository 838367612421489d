//! Event type names.

/// A member proposed a new investment.
pub const INVESTMENT_CREATED: &str = "investment.created";

/// A vote was created or overwritten.
pub const VOTE_RECORDED: &str = "investment.vote_recorded";

/// An investment crossed the approval quorum and became active.
pub const INVESTMENT_ACTIVATED: &str = "investment.activated";

/// A vote was committed but the follow-up activation check failed.
/// Payload carries `attempt` (1-based).
pub const ACTIVATION_DEFERRED: &str = "investment.activation_deferred";
