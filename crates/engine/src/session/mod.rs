//! Per-account session: one ordered pass through the daily task graph
//!
//! A pass runs login, balance, quiz, daily booster, farm/claim loop,
//! tasks, game ticket and games, then reports how long until the farm can
//! be claimed again. Any `Err` returned by [`Session::run`] is fatal for this
//! account's pass only; soft failures are logged and the pass carries on.

mod auth;
mod games;
mod purchase;
mod quiz;
mod reward;
mod tasks;

pub use purchase::PurchaseOutcome;

use matchfarm_core::{
    countdown_secs, Credential, EpochMillis, Error, Points, PurchaseKind, Result, SessionConfig,
    SessionReport, UidRequest,
};
use matchfarm_networking::api::base_headers;
use matchfarm_networking::{ApiResponse, Endpoint, Transport};
use reqwest::header::HeaderMap;
use serde::Serialize;
use tracing::{info, warn};

pub struct Session<'a> {
    transport: &'a dyn Transport,
    config: &'a SessionConfig,
    credential: Credential,
    /// Base headers plus this session's token once logged in
    headers: HeaderMap,
    token: Option<String>,
    balance: Points,
    report: SessionReport,
}

impl<'a> Session<'a> {
    pub fn new(transport: &'a dyn Transport, config: &'a SessionConfig, credential: Credential) -> Self {
        let identity = credential.identity();
        let report = SessionReport {
            uid: identity.id,
            first_name: identity.first_name.clone(),
            username: identity.username.clone(),
            ..SessionReport::default()
        };

        Self {
            transport,
            config,
            credential,
            headers: base_headers(),
            token: None,
            balance: Points::default(),
            report,
        }
    }

    /// Drive the full task sequence for this account
    pub async fn run(mut self) -> Result<SessionReport> {
        self.login().await?;
        self.fetch_balance().await?;

        self.report.quiz_completed = self.complete_quiz().await;
        if self.report.quiz_completed {
            info!("Completed daily quiz");
        } else {
            warn!("Unable to complete daily quiz");
        }

        if let Some(status) = self.daily_purchase_status().await {
            if status.needs(PurchaseKind::Daily) {
                self.purchase(PurchaseKind::Daily).await;
            }
        }

        let next_claim = self.run_reward_cycle().await?;

        self.complete_tasks().await;

        if let Some(status) = self.daily_purchase_status().await {
            if status.needs(PurchaseKind::Game) {
                self.purchase(PurchaseKind::Game).await;
            }
        }

        if self.config.play_games {
            self.play_games().await?;
        }

        self.report.countdown_secs = countdown_secs(
            next_claim,
            EpochMillis::now(),
            self.config.countdown_buffer_secs,
        );
        Ok(self.report)
    }

    fn uid_body(&self) -> UidRequest {
        UidRequest {
            uid: self.credential.uid(),
        }
    }

    async fn get(&self, endpoint: Endpoint) -> Result<ApiResponse> {
        self.transport.send(endpoint, &self.headers, None).await
    }

    async fn post<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<ApiResponse> {
        self.post_with_headers(endpoint, &self.headers, body).await
    }

    async fn post_with_headers<B: Serialize>(
        &self,
        endpoint: Endpoint,
        headers: &HeaderMap,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.transport.send(endpoint, headers, Some(&body)).await
    }
}

/// Turn a non-200 response into a fatal-for-pass error
fn ensure_ok(endpoint: Endpoint, response: &ApiResponse) -> Result<()> {
    if response.is_ok() {
        Ok(())
    } else {
        Err(Error::ApiStatus {
            endpoint: endpoint.path(),
            status: response.status,
        })
    }
}
