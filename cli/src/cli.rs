//! Command-line definition

use clap::{Parser, Subcommand};
use matchfarm_core::BotConfig;
use std::path::PathBuf;

/// Matchain reward farming bot
#[derive(Parser, Debug)]
#[command(name = "matchfarm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account file, one credential per line
    #[arg(short, long, default_value = "data.txt", global = true)]
    pub data: PathBuf,

    /// Optional TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite run ledger; pass outcomes are recorded when set
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Skip the game rounds
    #[arg(long)]
    pub no_games: bool,

    /// Do not clear the terminal at startup
    #[arg(long)]
    pub no_clear: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print per-account totals from the run ledger
    Stats,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn bot_config(&self) -> matchfarm_core::Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load_from(path)?,
            None => BotConfig::default(),
        };

        if self.no_games {
            config.session.play_games = false;
        }
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "matchfarm=debug,matchfarm_engine=debug,matchfarm_networking=debug,matchfarm_persistence=debug"
        } else {
            "matchfarm=info,matchfarm_engine=info,matchfarm_networking=warn,matchfarm_persistence=info"
        }
    }
}
