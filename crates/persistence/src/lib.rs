//! Matchfarm Persistence - Account file loading and the run ledger

pub mod accounts;
pub mod sqlite;

pub use accounts::load_accounts;
pub use sqlite::Database;
