//! Stockroom CLI - JSON-backed inventory manager and task tracker
//!
//! Usage:
//!   stockroom                      - Pick an app interactively
//!   stockroom inventory [--file F] - Inventory menu
//!   stockroom tasks [--file F]     - Task tracker menu
//!   stockroom init [dir]           - Write a config and empty stores

use anyhow::Context;
use clap::{Parser, Subcommand};
use cli::commands::{InitCommand, InventoryCommand, TasksCommand};
use cli::interactive::InteractiveCli;
use shared::{StockroomConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Stockroom - JSON-backed inventory manager and task tracker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file naming the store files
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the store inventory
    Inventory(InventoryCommand),
    /// Track tasks
    Tasks(TasksCommand),
    /// Initialize a config file and empty stores
    Init(InitCommand),
}

fn load_config(path: &Path) -> anyhow::Result<StockroomConfig> {
    let config = StockroomConfig::load_or_default(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the menus
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inventory(cmd)) => cmd.run(&load_config(&cli.config)?),
        Some(Commands::Tasks(cmd)) => cmd.run(&load_config(&cli.config)?),
        Some(Commands::Init(cmd)) => cmd.run(),
        None => {
            // No subcommand - offer the app picker
            let mut interactive = InteractiveCli::new(load_config(&cli.config)?);
            interactive.run()
        }
    }
}
