//! Courier command-line interface.

pub mod commands;
pub mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use courier_core::{Config, ConfigError};
use std::path::PathBuf;

/// Courier - route messages to chat and social channels
#[derive(Parser)]
#[command(name = "courier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "COURIER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send one message through a channel
    Send(commands::send::SendArgs),

    /// Send the sample messages to every built-in channel
    Demo(commands::demo::DemoArgs),

    /// List registered channels
    Channels,

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Show version information
    Version,
}

/// Logging filter used when `RUST_LOG` is not set.
///
/// `config` is `None` when the configuration failed to load.
pub fn default_filter(verbose: u8, config: Option<&Config>) -> String {
    let level = match verbose {
        0 => config.map_or("info", |c| c.logging.level.as_str()),
        1 => "debug",
        _ => "trace",
    };
    format!("courier={}", level)
}

/// Run the CLI with the given arguments and the result of loading the config.
///
/// A config that failed to load is reported by every command that needs it.
pub async fn run(cli: Cli, config: Result<Config, ConfigError>) -> anyhow::Result<()> {
    match cli.command {
        Commands::Send(args) => commands::send::run(args, &loaded(config)?).await,
        Commands::Demo(args) => commands::demo::run(args, &loaded(config)?).await,
        Commands::Channels => commands::channels::run(&loaded(config)?),
        Commands::Config(args) => commands::config::run(args, cli.config, config),
        Commands::Version => {
            println!("courier {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn loaded(config: Result<Config, ConfigError>) -> anyhow::Result<Config> {
    config.context("Failed to load configuration")
}
