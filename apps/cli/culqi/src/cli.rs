use culqi_client::{Credential, QueryParams};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "culqi")]
#[command(about = "Talk to the Culqi v2 payments API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding culqi.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory for culqi.log (defaults to the platform data dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (can be used multiple times: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbosity", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Charges against a token or card
    Charges {
        #[command(subcommand)]
        command: ChargeCommands,
    },

    /// Stored customers
    Customers {
        #[command(subcommand)]
        command: CustomerCommands,
    },

    /// Card tokens
    Tokens {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Refunds issued on charges
    Refunds {
        #[command(subcommand)]
        command: RefundCommands,
    },

    /// Send a request to any endpoint and print the response body
    Raw(RawArgs),

    /// Inspect or create culqi.json
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChargeCommands {
    Get { id: String },
    List(ListArgs),
    /// Capture an authorized charge
    Capture { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    Get { id: String },
    List(ListArgs),
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum RefundCommands {
    Get { id: String },
    List(ListArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default culqi.json
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Filters shared by list endpoints.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Maximum number of records in the page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Extra filter, repeatable (e.g. --param email=a@b.pe)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

impl ListArgs {
    /// Query parameters in command-line order, `limit` first.
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(limit) = self.limit {
            query.push("limit", limit);
        }
        for (key, value) in &self.params {
            query.push(key.as_str(), value);
        }
        query
    }
}

/// Which Culqi host a raw request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Host {
    /// api.culqi.com, secret key
    Api,
    /// secure.culqi.com, public key
    Secure,
}

impl Host {
    pub fn credential(self) -> Credential {
        match self {
            Host::Api => Credential::Secret,
            Host::Secure => Credential::Public,
        }
    }
}

#[derive(Args, Debug)]
pub struct RawArgs {
    #[arg(value_enum)]
    pub host: Host,

    /// HTTP method, e.g. GET or POST
    pub method: String,

    /// Path below /v2, e.g. charges/chr_test_123
    pub path: String,

    /// Query parameter, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// JSON request body
    #[arg(long, value_name = "JSON")]
    pub body: Option<String>,
}

pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
