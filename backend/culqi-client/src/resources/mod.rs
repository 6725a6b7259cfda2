//! Typed operations over the dispatcher.
//!
//! Each resource builds its path, serializes the request body, dispatches with
//! the right credential and decodes the returned bytes.

mod charges;
mod customers;
mod refunds;
mod tokens;

pub use charges::Charges;
pub use customers::Customers;
pub use refunds::Refunds;
pub use tokens::Tokens;

use crate::client::CulqiClient;
use crate::credentials::Credential;
use crate::dispatch::QueryParams;
use crate::error::culqi::CulqiError;

use models::ModelError;

use serde::Serialize;
use serde::de::DeserializeOwned;

const METHOD_GET: &str = "GET";
const METHOD_POST: &str = "POST";
const METHOD_DELETE: &str = "DELETE";

async fn send_json<T: DeserializeOwned>(
    client: &CulqiClient,
    credential: Credential,
    method: &str,
    path: &str,
    params: Option<&QueryParams>,
    body: Option<Vec<u8>>,
) -> Result<T, CulqiError> {
    let bytes = client.raw(credential, method, path, params, body).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[track_caller]
fn encode_body<B: Serialize>(body: &B) -> Result<Vec<u8>, CulqiError> {
    Ok(serde_json::to_vec(body)?)
}

/// `{collection}/{id}`, rejecting ids that would escape the collection path.
#[track_caller]
pub(crate) fn member_path(collection: &str, id: &str) -> Result<String, CulqiError> {
    if id.is_empty() {
        return Err(ModelError::validation(format!("{collection} id cannot be empty")).into());
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
    {
        return Err(ModelError::validation(format!("Invalid {collection} id: {id}")).into());
    }

    Ok(format!("{collection}/{id}"))
}
