//! In-process domain events for the investment club.
//!
//! - [`EventBus`] -- publish/subscribe hub backed by `tokio::sync::broadcast`.
//! - [`PlatformEvent`] -- the event envelope.
//! - [`names`] -- the event type names published by the voting engine.

pub mod bus;
pub mod names;

pub use bus::{EventBus, PlatformEvent};
