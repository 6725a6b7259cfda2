use crate::cli::{ChargeCommands, CustomerCommands, RefundCommands, TokenCommands};
use crate::commands::to_pretty_json;
use crate::error::CliError;

use culqi_client::CulqiClient;

pub async fn charges(client: &CulqiClient, command: &ChargeCommands) -> Result<String, CliError> {
    let charges = client.charges();
    match command {
        ChargeCommands::Get { id } => to_pretty_json(&charges.get(id).await?),
        ChargeCommands::List(args) => {
            let query = args.query();
            to_pretty_json(&charges.list(Some(&query)).await?)
        }
        ChargeCommands::Capture { id } => to_pretty_json(&charges.capture(id).await?),
    }
}

pub async fn customers(
    client: &CulqiClient,
    command: &CustomerCommands,
) -> Result<String, CliError> {
    let customers = client.customers();
    match command {
        CustomerCommands::Get { id } => to_pretty_json(&customers.get(id).await?),
        CustomerCommands::List(args) => {
            let query = args.query();
            to_pretty_json(&customers.list(Some(&query)).await?)
        }
        CustomerCommands::Delete { id } => to_pretty_json(&customers.delete(id).await?),
    }
}

pub async fn tokens(client: &CulqiClient, command: &TokenCommands) -> Result<String, CliError> {
    match command {
        TokenCommands::Get { id } => to_pretty_json(&client.tokens().get(id).await?),
    }
}

pub async fn refunds(client: &CulqiClient, command: &RefundCommands) -> Result<String, CliError> {
    let refunds = client.refunds();
    match command {
        RefundCommands::Get { id } => to_pretty_json(&refunds.get(id).await?),
        RefundCommands::List(args) => {
            let query = args.query();
            to_pretty_json(&refunds.list(Some(&query)).await?)
        }
    }
}
