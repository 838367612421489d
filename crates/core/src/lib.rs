//! Domain types, validation rules, and quorum arithmetic shared by the
//! database and API layers. Nothing in this crate performs I/O.

pub mod error;
pub mod investment;
pub mod ledger;
pub mod member;
pub mod performance;
pub mod types;
pub mod voting;
