//! Command handlers. Each returns the text destined for stdout.

pub mod config;
pub mod raw;
pub mod resources;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

use culqi_client::{ClientConfig, Credentials, CulqiClient};

use std::path::PathBuf;

use log::debug;
use serde::Serialize;

const APP_DIR_NAME: &str = "culqi";

/// Resolve config, build the client from the environment, then execute.
pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    debug!("Using config directory {}", config_dir.display());

    if let Commands::Config { command } = &cli.command {
        return config::execute(command, &config_dir);
    }

    let config = ClientConfig::load(&config_dir)?;
    let credentials = Credentials::from_env()?;
    let client = CulqiClient::with_config(credentials, config)?;

    execute(&client, &cli.command).await
}

/// Execute an API command against an already built client.
pub async fn execute(client: &CulqiClient, command: &Commands) -> Result<String, CliError> {
    match command {
        Commands::Charges { command } => resources::charges(client, command).await,
        Commands::Customers { command } => resources::customers(client, command).await,
        Commands::Tokens { command } => resources::tokens(client, command).await,
        Commands::Refunds { command } => resources::refunds(client, command).await,
        Commands::Raw(args) => raw::execute(client, args).await,
        Commands::Config { .. } => Err(CliError::usage(
            "config commands do not talk to the API",
        )),
    }
}

pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| CliError::io("Could not determine a config directory")),
    }
}

pub fn resolve_log_dir(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
            .ok_or_else(|| CliError::io("Could not determine a log directory")),
    }
}

pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
