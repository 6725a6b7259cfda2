use culqi::cli::Cli;
use culqi::commands::{self, resolve_log_dir};
use culqi::error::CliError;
use culqi::logger::{console_level, initialize as LoggerInitialize};

use std::fs::create_dir_all;
use std::process::exit;

use clap::Parser;
use log::{debug, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        // Logging is best effort; the command still runs
        eprintln!("{e}");
    }

    match commands::run(&cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            debug!("Command failed: {e:?}");
            eprintln!("{e}");
            exit(e.exit_code());
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let log_dir = resolve_log_dir(cli.log_dir.clone())?;

    create_dir_all(&log_dir).map_err(|e| {
        CliError::io(format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    LoggerInitialize(&log_dir, console_level(cli.verbosity))?;
    info!("Log directory: {}", log_dir.display());
    Ok(())
}
