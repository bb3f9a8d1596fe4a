//! Endpoint table for the Matchain mini-app API

use std::fmt;

/// Every endpoint the session talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Balance,
    QuizProgress,
    QuizSubmit,
    DailyTaskStatus,
    DailyPurchase,
    RewardStatus,
    RewardFarming,
    RewardClaim,
    TaskList,
    TaskComplete,
    TaskClaim,
    GameRule,
    GamePlay,
    GameClaim,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/user/login",
            Endpoint::Balance => "/point/balance",
            Endpoint::QuizProgress => "/daily/quiz/progress",
            Endpoint::QuizSubmit => "/daily/quiz/submit",
            Endpoint::DailyTaskStatus => "/daily/task/status",
            Endpoint::DailyPurchase => "/daily/task/purchase",
            Endpoint::RewardStatus => "/point/reward",
            Endpoint::RewardFarming => "/point/reward/farming",
            Endpoint::RewardClaim => "/point/reward/claim",
            Endpoint::TaskList => "/point/task/list",
            Endpoint::TaskComplete => "/point/task/complete",
            Endpoint::TaskClaim => "/point/task/claim",
            Endpoint::GameRule => "/game/rule",
            Endpoint::GamePlay => "/game/play",
            Endpoint::GameClaim => "/game/claim",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
