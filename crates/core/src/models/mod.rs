//! Wire and domain models for the Matchain reward service

mod account;
mod auth;
mod daily;
mod game;
mod quiz;
mod report;
mod reward;
mod task;

pub use account::*;
pub use auth::*;
pub use daily::*;
pub use game::*;
pub use quiz::*;
pub use report::*;
pub use reward::*;
pub use task::*;
