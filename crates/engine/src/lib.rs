//! Matchfarm Engine - Per-account sessions and the multi-account scheduler

pub mod countdown;
pub mod scheduler;
pub mod session;

#[cfg(test)]
mod testing;

pub use scheduler::{next_wait, PassSummary, Scheduler};
pub use session::{PurchaseOutcome, Session};
