use crate::config::ClientConfig;
use crate::credentials::{Credential, Credentials};
use crate::dispatch::{Dispatcher, QueryParams};
use crate::error::culqi::CulqiError;
use crate::resources::{Charges, Customers, Refunds, Tokens};

use std::sync::Arc;

use log::info;
use reqwest::Client;

const DEFAULT_USER_AGENT: &str = concat!("culqi-client/", env!("CARGO_PKG_VERSION"));

/// Entry point: one authenticated and one public dispatcher sharing a connection pool.
#[derive(Debug, Clone)]
pub struct CulqiClient {
    config: ClientConfig,
    api: Dispatcher,
    secure: Dispatcher,
}

impl CulqiClient {
    /// Client against the production Culqi hosts with default settings.
    pub fn new(credentials: Credentials) -> Result<Self, CulqiError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, CulqiError> {
        config.validate()?;

        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()?;

        info!(
            "Culqi client ready: api={} secure={} timeout={}s live={}",
            config.api_base_url,
            config.secure_base_url,
            config.timeout_secs,
            credentials.is_live()
        );

        let credentials = Arc::new(credentials);

        Ok(Self {
            api: Dispatcher::new(http.clone(), Arc::clone(&credentials), Credential::Secret),
            secure: Dispatcher::new(http, credentials, Credential::Public),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The secret-key dispatcher for the standard host, or the public-key one for the secure host.
    pub fn dispatcher(&self, credential: Credential) -> &Dispatcher {
        match credential {
            Credential::Secret => &self.api,
            Credential::Public => &self.secure,
        }
    }

    /// Fully qualified URL for `path` on the host served by `credential`.
    pub fn endpoint(&self, credential: Credential, path: &str) -> String {
        let base = match credential {
            Credential::Secret => &self.config.api_base_url,
            Credential::Public => &self.config.secure_base_url,
        };

        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Dispatch to an endpoint without a typed wrapper.
    pub async fn raw(
        &self,
        credential: Credential,
        method: &str,
        path: &str,
        params: Option<&QueryParams>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, CulqiError> {
        let endpoint = self.endpoint(credential, path);
        self.dispatcher(credential)
            .dispatch(method, &endpoint, params, body)
            .await
    }

    pub fn charges(&self) -> Charges<'_> {
        Charges::new(self)
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }
}
