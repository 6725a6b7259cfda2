use super::{METHOD_GET, METHOD_POST, encode_body, member_path, send_json};

use crate::client::CulqiClient;
use crate::credentials::Credential;
use crate::dispatch::QueryParams;
use crate::error::culqi::CulqiError;

use models::{Refund, RefundRequest, WrapperResponse};

const REFUNDS_ENDPOINT: &str = "refunds";

pub struct Refunds<'a> {
    client: &'a CulqiClient,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(client: &'a CulqiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &RefundRequest) -> Result<Refund, CulqiError> {
        let body = encode_body(request)?;
        send_json(
            self.client,
            Credential::Secret,
            METHOD_POST,
            REFUNDS_ENDPOINT,
            None,
            Some(body),
        )
        .await
    }

    pub async fn get(&self, id: &str) -> Result<Refund, CulqiError> {
        let path = member_path(REFUNDS_ENDPOINT, id)?;
        send_json(self.client, Credential::Secret, METHOD_GET, &path, None, None).await
    }

    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<WrapperResponse<Refund>, CulqiError> {
        send_json(
            self.client,
            Credential::Secret,
            METHOD_GET,
            REFUNDS_ENDPOINT,
            params,
            None,
        )
        .await
    }
}
