//! Error types and Result alias for the farming bot

use thiserror::Error;

/// Main error type for the farming bot
///
/// Every variant that reaches a session boundary is fatal for that
/// account's pass only. Soft failures are logged in place and never
/// become an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Token not found in login response")]
    TokenMissing,

    #[error("API request to {endpoint} failed with status {status}")]
    ApiStatus { endpoint: &'static str, status: u16 },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request to {endpoint} gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        endpoint: String,
        attempts: u32,
        last_error: String,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid account credential: {0}")]
    InvalidCredential(String),

    #[error("No accounts found in {0}")]
    NoAccounts(String),

    #[error("Game claim failed {failures} times in a row")]
    GameClaimExhausted { failures: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
