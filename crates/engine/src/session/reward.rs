//! Farm / claim cycle

use super::{ensure_ok, Session};
use matchfarm_core::{EpochMillis, Points, Result, RewardPhase, RewardStatus};
use matchfarm_networking::Endpoint;
use tracing::{debug, info, warn};

impl Session<'_> {
    /// Poll the farm until it is running, starting or claiming as needed
    ///
    /// Returns the instant the running farm matures. A single pass may claim
    /// several times if the server keeps reporting a matured farm.
    pub(super) async fn run_reward_cycle(&mut self) -> Result<EpochMillis> {
        loop {
            let response = self.post(Endpoint::RewardStatus, &self.uid_body()).await?;
            ensure_ok(Endpoint::RewardStatus, &response)?;
            let status: RewardStatus = response.data(Endpoint::RewardStatus)?;

            match status.phase(EpochMillis::now()) {
                RewardPhase::NotStarted => {
                    let response = self.post(Endpoint::RewardFarming, &self.uid_body()).await?;
                    ensure_ok(Endpoint::RewardFarming, &response)?;
                    debug!("Farming started");
                }
                RewardPhase::Farming(next_claim) => {
                    warn!("Currently farming!");
                    info!("Farming completion time: {}", next_claim.to_local_string());
                    return Ok(next_claim);
                }
                RewardPhase::Claimable => {
                    let response = self.post(Endpoint::RewardClaim, &self.uid_body()).await?;
                    ensure_ok(Endpoint::RewardClaim, &response)?;

                    let granted = Points(response.data::<f64>(Endpoint::RewardClaim).unwrap_or_default());
                    self.balance = self.balance + granted;
                    self.report.rewards_claimed += 1;

                    info!("Reward successfully claimed: {}", granted.display_value());
                    info!("Balance: {}", self.balance.display_value());
                }
            }
        }
    }
}
