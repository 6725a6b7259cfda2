use super::{METHOD_GET, METHOD_POST, encode_body, member_path, send_json};

use crate::client::CulqiClient;
use crate::credentials::Credential;
use crate::error::culqi::CulqiError;

use models::{Token, TokenRequest};

const TOKENS_ENDPOINT: &str = "tokens";

/// Card tokenization.
///
/// `create` goes to the secure host with the public key, the same call a
/// browser checkout makes. `get` reads the token back with the secret key.
pub struct Tokens<'a> {
    client: &'a CulqiClient,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(client: &'a CulqiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &TokenRequest) -> Result<Token, CulqiError> {
        let body = encode_body(request)?;
        send_json(
            self.client,
            Credential::Public,
            METHOD_POST,
            TOKENS_ENDPOINT,
            None,
            Some(body),
        )
        .await
    }

    pub async fn get(&self, id: &str) -> Result<Token, CulqiError> {
        let path = member_path(TOKENS_ENDPOINT, id)?;
        send_json(self.client, Credential::Secret, METHOD_GET, &path, None, None).await
    }
}
