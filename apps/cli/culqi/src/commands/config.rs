use crate::cli::ConfigCommands;
use crate::commands::to_pretty_json;
use crate::error::CliError;

use culqi_client::ClientConfig;
use culqi_client::config::CONFIG_FILE_NAME;

use std::path::Path;

use log::info;

pub fn execute(command: &ConfigCommands, config_dir: &Path) -> Result<String, CliError> {
    match command {
        ConfigCommands::Show => show(config_dir),
        ConfigCommands::Init { force } => init(config_dir, *force),
    }
}

/// Effective configuration: the file if present, defaults otherwise.
pub fn show(config_dir: &Path) -> Result<String, CliError> {
    let config = ClientConfig::load(config_dir)?;
    to_pretty_json(&config)
}

/// Write defaults to `{config_dir}/culqi.json`, refusing to clobber unless forced.
pub fn init(config_dir: &Path, force: bool) -> Result<String, CliError> {
    let path = config_dir.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        return Err(CliError::usage(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }

    ClientConfig::default().save(config_dir)?;
    info!("Wrote default config to {}", path.display());

    Ok(format!("Wrote {}", path.display()))
}
