//! SQLite run ledger

mod connection;
mod runs;

pub use connection::Database;
pub use runs::*;
