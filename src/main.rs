//! reactwatch CLI entry point.
//!
//! Provides `start` and `check` subcommands for running the relay or only
//! validating its configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use teloxide::Bot;
use tracing::{debug, info};

use reactwatch::config::{config_source, load_config, load_dotenv, Config};
use reactwatch::logging;
use reactwatch::relay::{RelayDispatcher, WatchList};
use reactwatch::telegram::{run_telegram, TelegramOutbound};

/// reactwatch — relay Telegram channel reactions to an administrator.
#[derive(Parser)]
#[command(name = "reactwatch", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Run the relay until interrupted.
    Start {
        /// Path to config.toml (default: ~/.reactwatch/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate configuration and exit.
    Check {
        /// Path to config.toml (default: ~/.reactwatch/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Start { config } => handle_start(config).await,
        Command::Check { config } => handle_check(config),
    }
}

/// Where the resolved configuration came from.
struct ConfigSources {
    config_file: Option<PathBuf>,
    dotenv: Option<PathBuf>,
}

/// Load `.env`, the config file and the environment into a [`Config`].
fn resolve_config(path: Option<PathBuf>) -> anyhow::Result<(Config, ConfigSources)> {
    let dotenv = load_dotenv().context("failed to load .env")?;
    let config_file = config_source(path.as_deref()).context("failed to locate configuration")?;
    let file = load_config(config_file.as_deref()).context("failed to load configuration")?;
    let config = Config::from_env(file).context("invalid configuration")?;
    Ok((
        config,
        ConfigSources {
            config_file,
            dotenv,
        },
    ))
}

/// Log which files contributed to the configuration.
fn log_sources(sources: &ConfigSources) {
    match sources.config_file {
        Some(ref path) => info!(path = %path.display(), "config file loaded"),
        None => info!("no config file found, using defaults"),
    }
    if let Some(ref path) = sources.dotenv {
        debug!(path = %path.display(), "env file loaded");
    }
}

/// Run the relay.
async fn handle_start(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // The log directory and level come from the config, so the subscriber
    // is installed after resolution and the sources are logged afterwards.
    let (config, sources) = resolve_config(config_path)?;

    let _logging_guard = match config.logging.dir {
        Some(ref dir) => Some(logging::init_production(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };

    log_sources(&sources);
    info!(admin = %config.admin, "reactwatch starting");

    let bot = Bot::new(&config.bot_token);
    let outbound = Arc::new(TelegramOutbound::new(bot.clone()));
    let watchlist = Arc::new(WatchList::new());
    let relay = Arc::new(RelayDispatcher::new(watchlist, outbound, config.admin));

    run_telegram(bot, relay).await
}

/// Validate configuration and print a summary.
fn handle_check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    logging::init_cli("info");

    let (config, sources) = resolve_config(config_path)?;
    log_sources(&sources);

    println!("configuration ok");
    println!("admin: {}", config.admin);
    println!("log level: {}", config.logging.level);
    match config.logging.dir {
        Some(ref dir) => println!("log dir: {}", dir.display()),
        None => println!("log dir: (console only)"),
    }
    Ok(())
}
