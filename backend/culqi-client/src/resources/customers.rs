use super::{METHOD_DELETE, METHOD_GET, METHOD_POST, encode_body, member_path, send_json};

use crate::client::CulqiClient;
use crate::credentials::Credential;
use crate::dispatch::QueryParams;
use crate::error::culqi::CulqiError;

use models::{Customer, CustomerDeleted, CustomerRequest, WrapperResponse};

const CUSTOMERS_ENDPOINT: &str = "customers";

pub struct Customers<'a> {
    client: &'a CulqiClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a CulqiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &CustomerRequest) -> Result<Customer, CulqiError> {
        request.validate()?;
        let body = encode_body(request)?;
        send_json(
            self.client,
            Credential::Secret,
            METHOD_POST,
            CUSTOMERS_ENDPOINT,
            None,
            Some(body),
        )
        .await
    }

    pub async fn get(&self, id: &str) -> Result<Customer, CulqiError> {
        let path = member_path(CUSTOMERS_ENDPOINT, id)?;
        send_json(self.client, Credential::Secret, METHOD_GET, &path, None, None).await
    }

    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<WrapperResponse<Customer>, CulqiError> {
        send_json(
            self.client,
            Credential::Secret,
            METHOD_GET,
            CUSTOMERS_ENDPOINT,
            params,
            None,
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<CustomerDeleted, CulqiError> {
        let path = member_path(CUSTOMERS_ENDPOINT, id)?;
        send_json(self.client, Credential::Secret, METHOD_DELETE, &path, None, None).await
    }
}
