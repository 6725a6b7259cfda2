use super::{METHOD_GET, METHOD_POST, encode_body, member_path, send_json};

use crate::client::CulqiClient;
use crate::credentials::Credential;
use crate::dispatch::QueryParams;
use crate::error::culqi::CulqiError;

use models::{Charge, ChargeRequest, WrapperResponse};

const CHARGES_ENDPOINT: &str = "charges";

/// `/charges`, authenticated with the secret key.
pub struct Charges<'a> {
    client: &'a CulqiClient,
}

impl<'a> Charges<'a> {
    pub(crate) fn new(client: &'a CulqiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &ChargeRequest) -> Result<Charge, CulqiError> {
        let body = encode_body(request)?;
        send_json(
            self.client,
            Credential::Secret,
            METHOD_POST,
            CHARGES_ENDPOINT,
            None,
            Some(body),
        )
        .await
    }

    pub async fn get(&self, id: &str) -> Result<Charge, CulqiError> {
        let path = member_path(CHARGES_ENDPOINT, id)?;
        send_json(self.client, Credential::Secret, METHOD_GET, &path, None, None).await
    }

    /// One page of charges; filters and cursors go in `params` (`limit`, `after`, `email`, ...).
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<WrapperResponse<Charge>, CulqiError> {
        send_json(
            self.client,
            Credential::Secret,
            METHOD_GET,
            CHARGES_ENDPOINT,
            params,
            None,
        )
        .await
    }

    /// Capture a charge created with `capture: false`.
    pub async fn capture(&self, id: &str) -> Result<Charge, CulqiError> {
        let path = format!("{}/capture", member_path(CHARGES_ENDPOINT, id)?);
        send_json(self.client, Credential::Secret, METHOD_POST, &path, None, None).await
    }
}
