//! Request dispatch against the Culqi hosts.
//!
//! One [`Dispatcher`] type serves both hosts; the [`Credential`] it was built
//! with decides which key goes into the `Authorization` header.

mod query;

pub use query::QueryParams;

use crate::classify::classify;
use crate::credentials::{Credential, Credentials};
use crate::error::culqi::CulqiError;

use common::HttpStatusCode;

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: Client,
    credentials: Arc<Credentials>,
    credential: Credential,
}

impl Dispatcher {
    /// Build a dispatcher over a shared HTTP client.
    ///
    /// Cloning a `reqwest::Client` shares its connection pool, so the secret and
    /// public dispatchers of one `CulqiClient` reuse the same connections.
    pub fn new(http: Client, credentials: Arc<Credentials>, credential: Credential) -> Self {
        Self {
            http,
            credentials,
            credential,
        }
    }

    pub fn credential(&self) -> Credential {
        self.credential
    }

    /// Send one request and return the raw response body.
    ///
    /// # Arguments
    /// * `method` - HTTP method token, e.g. `"POST"`
    /// * `endpoint` - Fully qualified URL including the resource path
    /// * `params` - Appended as a query string when present and non-empty
    /// * `body` - Sent verbatim; expected to be a JSON document
    ///
    /// # Errors
    /// - [`CulqiError::InvalidMethod`] / [`CulqiError::UrlParse`] before any network call
    /// - [`CulqiError::Http`] for transport failures
    /// - [`CulqiError::Api`] for classified status codes, carrying the response body
    /// - [`CulqiError::UnexpectedStatus`] for any other status outside `[200, 206]`
    pub async fn dispatch(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&QueryParams>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, CulqiError> {
        let method =
            Method::from_bytes(method.as_bytes()).map_err(|_| CulqiError::invalid_method(method))?;
        let url = build_url(endpoint, params)?;

        debug!(
            "Culqi request: {} {} ({} key)",
            method, url, self.credential
        );

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .bearer_auth(self.credentials.key_for(self.credential).as_str());

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        debug!(
            "Culqi response: {} {} -> HTTP {} ({} bytes)",
            method,
            url,
            status,
            bytes.len()
        );

        interpret_response(status, bytes.to_vec())
    }
}

/// Append `params` to `endpoint` as a URL-encoded query string.
pub fn build_url(endpoint: &str, params: Option<&QueryParams>) -> Result<Url, CulqiError> {
    let mut url = Url::parse(endpoint)?;

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

/// Turn a buffered response into the dispatch result.
///
/// Classification wins over the success range; unclassified codes outside
/// `[200, 206]` yield [`CulqiError::UnexpectedStatus`] without the body.
#[track_caller]
pub fn interpret_response(status: u16, body: Vec<u8>) -> Result<Vec<u8>, CulqiError> {
    if let Some(kind) = classify(status) {
        let body = String::from_utf8_lossy(&body).into_owned();
        warn!("Culqi rejected request: HTTP {} ({})", status, kind.category());
        return Err(CulqiError::api(kind, status, body));
    }

    if HttpStatusCode(status).is_success() {
        return Ok(body);
    }

    warn!("Culqi returned unhandled status code: HTTP {}", status);
    Err(CulqiError::unexpected_status(status))
}
