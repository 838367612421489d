//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod investment_repo;
pub mod member_repo;
pub mod performance_repo;
pub mod session_repo;
pub mod transaction_repo;
pub mod vote_repo;

pub use investment_repo::InvestmentRepo;
pub use member_repo::MemberRepo;
pub use performance_repo::{GroupPerformanceRepo, MonthlyPerformanceRepo};
pub use session_repo::SessionRepo;
pub use transaction_repo::TransactionRepo;
pub use vote_repo::VoteRepo;
