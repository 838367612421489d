pub mod auth;
pub mod dashboard;
pub mod investments;
pub mod members;
pub mod performance;
pub mod transactions;
pub mod votes;
