//! Row models and input DTOs, one module per table family.

pub mod investment;
pub mod member;
pub mod performance;
pub mod session;
pub mod transaction;
pub mod vote;
