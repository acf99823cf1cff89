//! Configuration management commands.

use anyhow::Context;
use clap::Args;
use courier_core::config::Config;
use courier_core::{paths, ConfigError};
use std::path::PathBuf;

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Validate the configuration file
    Validate,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the config command.
///
/// `path` is the `--config` override; `config` is the result of loading it.
pub fn run(
    args: ConfigArgs,
    path: Option<PathBuf>,
    config: Result<Config, ConfigError>,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => paths::config_file()?,
    };

    match args.command {
        ConfigCommand::Show => {
            let config = config.context("Failed to load configuration")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
        }

        ConfigCommand::Validate => {
            let loaded = match Config::load(&path) {
                Ok(loaded) => loaded,
                Err(ConfigError::NotFound(_)) => {
                    println!("No config file at {}; defaults in use", path.display());
                    Config::default()
                }
                Err(e) => return Err(e.into()),
            };
            loaded.validate()?;
            println!("Configuration is valid");
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}
