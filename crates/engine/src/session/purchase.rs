//! Daily booster and game ticket purchases

use super::Session;
use matchfarm_core::{
    DailyPurchaseStatus, DailyTaskStatus, PurchaseKind, PurchaseRequest, ALREADY_PURCHASED_CODE,
};
use matchfarm_networking::api::with_authorization;
use matchfarm_networking::Endpoint;
use tracing::{info, warn};

/// Result of one purchase attempt; none of them abort the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    AlreadyPurchased,
    Failed,
}

impl Session<'_> {
    /// Which daily categories still need buying; `None` when unknown
    pub(super) async fn daily_purchase_status(&self) -> Option<DailyPurchaseStatus> {
        let response = match self.get(Endpoint::DailyTaskStatus).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error checking daily task status: {}", e);
                return None;
            }
        };

        if !response.is_ok() {
            warn!("Error checking daily task status! Status: {}", response.status);
            return None;
        }

        match response.data::<Vec<DailyTaskStatus>>(Endpoint::DailyTaskStatus) {
            Ok(entries) => Some(DailyPurchaseStatus::from_entries(&entries)),
            Err(e) => {
                warn!("Error checking daily task status: {}", e);
                None
            }
        }
    }

    /// Buy one daily item, carrying the token as an explicit per-call header
    pub(super) async fn purchase(&self, kind: PurchaseKind) -> PurchaseOutcome {
        let Some(token) = self.token.as_deref() else {
            warn!("Cannot purchase {} before login", kind.label());
            return PurchaseOutcome::Failed;
        };

        let headers = match with_authorization(&self.headers, token) {
            Ok(headers) => headers,
            Err(e) => {
                warn!("Error purchasing {}: {}", kind.label(), e);
                return PurchaseOutcome::Failed;
            }
        };

        let body = PurchaseRequest {
            uid: self.credential.uid(),
            kind,
        };

        let response = match self
            .post_with_headers(Endpoint::DailyPurchase, &headers, &body)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Error purchasing {}: {}", kind.label(), e);
                return PurchaseOutcome::Failed;
            }
        };

        if response.code() == Some(ALREADY_PURCHASED_CODE) {
            warn!("You have already purchased a {}, try again later!", kind.label());
            PurchaseOutcome::AlreadyPurchased
        } else if response.is_ok() {
            info!("Successfully purchased {}", kind.label());
            PurchaseOutcome::Purchased
        } else {
            warn!("Error purchasing {}! Status: {}", kind.label(), response.status);
            PurchaseOutcome::Failed
        }
    }
}
