//! Multi-account scheduler that runs every account once per pass, forever
//!
//! Accounts are processed one at a time. After each pass the scheduler
//! sleeps until the soonest account can claim again, minus the time the
//! pass itself took.

use crate::countdown::{countdown, format_hms};
use crate::session::Session;
use matchfarm_core::{BotConfig, Credential, Result, SessionReport};
use matchfarm_networking::Transport;
use matchfarm_persistence::sqlite;
use matchfarm_persistence::{load_accounts, Database};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info, info_span, warn, Instrument};

/// Outcome of one pass over the account list
#[derive(Debug, Default)]
pub struct PassSummary {
    /// Countdown of every account whose session completed
    pub countdowns: Vec<i64>,
    pub reports: Vec<SessionReport>,
    pub failed: usize,
    pub elapsed_secs: i64,
}

pub struct Scheduler {
    transport: Arc<dyn Transport>,
    config: BotConfig,
    accounts_path: PathBuf,
    ledger: Option<Database>,
}

impl Scheduler {
    pub fn new(transport: Arc<dyn Transport>, config: BotConfig, accounts_path: PathBuf) -> Self {
        Self {
            transport,
            config,
            accounts_path,
            ledger: None,
        }
    }

    /// Record every pass outcome in the run ledger
    pub fn with_ledger(mut self, ledger: Database) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Run passes until the process is stopped
    ///
    /// Only the initial account load can fail; afterwards every error is
    /// confined to the account it happened on.
    pub async fn run(&self) -> Result<()> {
        let mut accounts = load_accounts(&self.accounts_path).await?;
        info!("Loaded {} accounts from {}", accounts.len(), self.accounts_path.display());

        loop {
            let summary = self.run_pass(&accounts).await;
            let wait = next_wait(&summary.countdowns, summary.elapsed_secs);

            info!(
                "Pass finished in {}s: {} succeeded, {} failed",
                summary.elapsed_secs,
                summary.reports.len(),
                summary.failed
            );
            if wait > 0 {
                info!("Next pass in {}", format_hms(wait));
            }
            countdown(wait, self.config.session.show_countdown).await;

            accounts = self.reload_accounts(accounts).await;
        }
    }

    /// Run a session for every account line, in order
    pub async fn run_pass(&self, accounts: &[String]) -> PassSummary {
        let started = Instant::now();
        let mut summary = PassSummary::default();

        for (index, line) in accounts.iter().enumerate() {
            match self.run_account(index + 1, line).await {
                Some(report) => {
                    summary.countdowns.push(report.countdown_secs);
                    summary.reports.push(report);
                }
                None => summary.failed += 1,
            }
        }

        summary.elapsed_secs = started.elapsed().as_secs() as i64;
        summary
    }

    async fn run_account(&self, index: usize, line: &str) -> Option<SessionReport> {
        let credential = match Credential::parse(line) {
            Ok(credential) => credential,
            Err(e) => {
                error!("Account {}: {}", index, e);
                return None;
            }
        };
        let identity = credential.identity().clone();

        info!("========== Account {} | {} ==========", index, identity.first_name);

        let span = info_span!("account", index, name = %identity.first_name);
        let session = Session::new(self.transport.as_ref(), &self.config.session, credential);

        match session.run().instrument(span).await {
            Ok(report) => {
                if let Some(ledger) = &self.ledger {
                    if let Err(e) = sqlite::record_success(ledger.pool(), &report).await {
                        warn!("Failed to record pass for {}: {}", identity.id, e);
                    }
                }
                let pacing = self.config.scheduler.account_pacing_secs;
                if pacing > 0 {
                    tokio::time::sleep(Duration::from_secs(pacing)).await;
                }
                Some(report)
            }
            Err(e) => {
                error!("Account {} | {}: {}", index, identity.first_name, e);
                if let Some(ledger) = &self.ledger {
                    if let Err(e) = sqlite::record_failure(ledger.pool(), &identity).await {
                        warn!("Failed to record pass for {}: {}", identity.id, e);
                    }
                }
                None
            }
        }
    }

    /// Re-read the account file, keeping `current` if that fails
    async fn reload_accounts(&self, current: Vec<String>) -> Vec<String> {
        match load_accounts(&self.accounts_path).await {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!("Keeping previous account list: {}", e);
                current
            }
        }
    }
}

/// Seconds to sleep before the next pass
pub fn next_wait(countdowns: &[i64], elapsed_secs: i64) -> u64 {
    countdowns
        .iter()
        .min()
        .map(|soonest| (soonest - elapsed_secs).max(0) as u64)
        .unwrap_or(0)
}
