//! Matchfarm - Main entry point

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::{Cli, Command};
use matchfarm_engine::Scheduler;
use matchfarm_networking::MatchainClient;
use matchfarm_persistence::sqlite;
use matchfarm_persistence::Database;
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Some(Command::Stats) => print_stats(&cli).await,
        None => run_bot(&cli).await,
    }
}

async fn run_bot(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.bot_config().context("Invalid configuration")?;

    if !cli.no_clear {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "\x1B[2J\x1B[1;1H");
        let _ = stdout.flush();
    }

    tracing::info!("Starting Matchfarm");

    let client = MatchainClient::new(&config.client).context("Failed to build HTTP client")?;
    let mut scheduler = Scheduler::new(Arc::new(client), config, cli.data.clone());

    if let Some(path) = &cli.db {
        let db = Database::connect(path)
            .await
            .with_context(|| format!("Failed to open run ledger {}", path.display()))?;
        tracing::info!("Recording passes to {}", path.display());
        scheduler = scheduler.with_ledger(db);
    }

    tokio::select! {
        result = scheduler.run() => {
            result.with_context(|| format!("Failed to load accounts from {}", cli.data.display()))?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            tracing::info!("Interrupted, shutting down");
        }
    }

    Ok(())
}

async fn print_stats(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.db else {
        bail!("stats needs a run ledger: pass --db <path>");
    };

    let db = Database::connect(path)
        .await
        .with_context(|| format!("Failed to open run ledger {}", path.display()))?;
    let stats = sqlite::list_account_stats(db.pool()).await?;

    if stats.is_empty() {
        println!("No passes recorded yet");
        return Ok(());
    }

    println!(
        "{:<12} {:<16} {:>7} {:>7} {:>7} {:>7} {:>7}  {}",
        "UID", "NAME", "PASSES", "FAILED", "CLAIMS", "TASKS", "GAMES", "LAST RUN"
    );
    for s in stats {
        println!(
            "{:<12} {:<16} {:>7} {:>7} {:>7} {:>7} {:>7}  {}",
            s.uid,
            s.first_name,
            s.total_passes,
            s.failed_passes,
            s.total_reward_claims,
            s.total_tasks_claimed,
            s.total_games_played,
            s.last_run_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
