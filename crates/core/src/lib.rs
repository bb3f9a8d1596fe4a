//! Matchfarm Core - Shared data models, configuration, types, and errors

pub mod config;
pub mod errors;
pub mod models;
pub mod types;

pub use config::{BotConfig, ClientConfig, RetryPolicy, SchedulerConfig, SessionConfig};
pub use errors::{Error, Result};
pub use models::*;
pub use types::*;
