//! Farming reward models for the `/point/reward*` endpoints

use crate::types::EpochMillis;
use serde::Deserialize;

/// `data` of `POST /point/reward`
#[derive(Debug, Clone, Deserialize)]
pub struct RewardStatus {
    /// Epoch milliseconds when the current farm matures; 0 when idle
    #[serde(default)]
    pub next_claim_timestamp: i64,
}

impl RewardStatus {
    pub fn phase(&self, now: EpochMillis) -> RewardPhase {
        RewardPhase::classify(self.next_claim_timestamp, now)
    }
}

/// Where an account sits in the farm/claim cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardPhase {
    /// No farm running; a farming-start call is required
    NotStarted,
    /// Farm running until the given instant
    Farming(EpochMillis),
    /// Farm matured; claim now
    Claimable,
}

impl RewardPhase {
    pub fn classify(next_claim_timestamp: i64, now: EpochMillis) -> Self {
        if next_claim_timestamp == 0 {
            RewardPhase::NotStarted
        } else if next_claim_timestamp > now.as_i64() {
            RewardPhase::Farming(EpochMillis(next_claim_timestamp))
        } else {
            RewardPhase::Claimable
        }
    }
}

/// Seconds until a farming account is next claimable, plus `buffer_secs`
pub fn countdown_secs(next_claim: EpochMillis, now: EpochMillis, buffer_secs: i64) -> i64 {
    next_claim.secs_after(now) + buffer_secs
}
