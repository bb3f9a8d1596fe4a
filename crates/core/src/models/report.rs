//! Outcome summaries of account passes

use serde::{Deserialize, Serialize};

/// What one successful session pass achieved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub uid: i64,
    pub first_name: String,
    pub username: String,
    /// Seconds until the reward is claimable again (includes buffer)
    pub countdown_secs: i64,
    pub quiz_completed: bool,
    pub rewards_claimed: u32,
    pub tasks_claimed: u32,
    pub games_played: u32,
}

/// Lifetime totals for one account, as kept by the run ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    pub uid: i64,
    pub first_name: String,
    pub username: String,
    pub total_passes: i64,
    pub failed_passes: i64,
    pub total_reward_claims: i64,
    pub total_tasks_claimed: i64,
    pub total_games_played: i64,
    pub last_countdown_secs: Option<i64>,
    pub last_run_at: chrono::DateTime<chrono::Utc>,
}
