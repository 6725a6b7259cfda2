use crate::cli::RawArgs;
use crate::error::CliError;

use culqi_client::{CulqiClient, QueryParams};

use serde_json::Value;

/// Send the request as given and render the body.
///
/// JSON bodies are pretty-printed; anything else is printed as received.
pub async fn execute(client: &CulqiClient, args: &RawArgs) -> Result<String, CliError> {
    let body = match &args.body {
        Some(text) => {
            // Checked only; the bytes go out exactly as typed
            serde_json::from_str::<Value>(text)?;
            Some(text.as_bytes().to_vec())
        }
        None => None,
    };

    let query: QueryParams = args.params.iter().cloned().collect();
    let params = (!query.is_empty()).then_some(&query);

    let bytes = client
        .raw(args.host.credential(), &args.method, &args.path, params, body)
        .await?;

    Ok(render_body(&bytes))
}

pub fn render_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
