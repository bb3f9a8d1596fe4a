//! Daily booster / ticket purchase models

use serde::{Deserialize, Serialize};

/// Purchasable daily category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseKind {
    /// Daily booster
    Daily,
    /// Game ticket
    Game,
}

impl PurchaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseKind::Daily => "daily",
            PurchaseKind::Game => "game",
        }
    }

    /// Human label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseKind::Daily => "Daily Booster",
            PurchaseKind::Game => "Game Ticket",
        }
    }
}

/// One entry of `GET /daily/task/status`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyTaskStatus {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub current_count: i64,
    #[serde(default)]
    pub task_count: i64,
}

impl DailyTaskStatus {
    pub fn needs_purchase(&self) -> bool {
        self.current_count < self.task_count
    }
}

/// Which daily categories still need a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyPurchaseStatus {
    pub daily_needs_purchase: bool,
    pub game_needs_purchase: bool,
}

impl DailyPurchaseStatus {
    /// Collapse the status list; a missing category needs nothing
    pub fn from_entries(entries: &[DailyTaskStatus]) -> Self {
        let needs = |kind: PurchaseKind| {
            entries
                .iter()
                .find(|entry| entry.kind == kind.as_str())
                .map(DailyTaskStatus::needs_purchase)
                .unwrap_or(false)
        };

        Self {
            daily_needs_purchase: needs(PurchaseKind::Daily),
            game_needs_purchase: needs(PurchaseKind::Game),
        }
    }

    pub fn needs(&self, kind: PurchaseKind) -> bool {
        match kind {
            PurchaseKind::Daily => self.daily_needs_purchase,
            PurchaseKind::Game => self.game_needs_purchase,
        }
    }
}

/// Body of `POST /daily/task/purchase`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PurchaseRequest {
    pub uid: i64,
    #[serde(rename = "type")]
    pub kind: PurchaseKind,
}

/// Application code meaning the category was already bought today
pub const ALREADY_PURCHASED_CODE: i64 = 400;
