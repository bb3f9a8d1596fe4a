//! Bot configuration
//!
//! Every field has a default, so an empty (or absent) TOML file yields the
//! behaviour of the stock bot: unbounded one-second transport retry, a
//! 30-second game dwell and a 30-second countdown buffer.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://tgapp-api.matchain.io/api/tgapp/v1";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl BotConfig {
    /// Load config from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the session cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.session.min_score > self.session.max_score {
            return Err(Error::ConfigError(format!(
                "session.min_score ({}) exceeds session.max_score ({})",
                self.session.min_score, self.session.max_score
            )));
        }
        if self.client.retry.multiplier < 1.0 {
            return Err(Error::ConfigError(
                "client.retry.multiplier must be at least 1.0".to_string(),
            ));
        }
        if self.client.retry.max_attempts == Some(0) {
            return Err(Error::ConfigError(
                "client.retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry schedule for transport-level failures
///
/// `max_attempts = None` retries forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: Option<u32>,
    pub initial_delay_ms: u64,
    pub multiplier: f64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: None,
            initial_delay_ms: 1000,
            multiplier: 1.0,
            max_delay_ms: 60_000,
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep after the `attempt`-th failure (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let delay = self.initial_delay_ms as f64 * self.multiplier.powi(exponent);
        let capped = delay.min(self.max_delay_ms as f64).max(0.0);
        Duration::from_millis(capped as u64)
    }

    /// Whether another attempt is allowed after `attempts` failures
    pub fn allows_retry(&self, attempts: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts < max)
    }
}

/// Per-account session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds between starting a game and submitting its score
    pub game_dwell_secs: u64,
    /// Seconds added to every reported countdown
    pub countdown_buffer_secs: i64,
    pub min_score: u32,
    pub max_score: u32,
    pub play_games: bool,
    /// Consecutive failed game claims after which the pass is abandoned
    pub max_game_claim_failures: u32,
    /// Render waits as a live countdown on the terminal
    pub show_countdown: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_dwell_secs: 30,
            countdown_buffer_secs: 30,
            min_score: 100,
            max_score: 150,
            play_games: true,
            max_game_claim_failures: 5,
            show_countdown: true,
        }
    }
}

impl SessionConfig {
    pub fn score_range(&self) -> RangeInclusive<u32> {
        self.min_score..=self.max_score
    }
}

/// Multi-account loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Pause after each successful account before the next one starts
    pub account_pacing_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            account_pacing_secs: 3,
        }
    }
}
