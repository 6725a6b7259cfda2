//! Test helpers for dispatcher integration tests.
//!
//! Every client built here points both Culqi hosts at a wiremock server.

use culqi_client::{ClientConfig, Credentials, CulqiClient};

use wiremock::MockServer;

pub const TEST_SECRET_KEY: &str = "sk_test_abc";
pub const TEST_PUBLIC_KEY: &str = "pk_test_xyz";

/// Test helper: client whose hosts both resolve to `{server}/v2`.
pub fn client_for(server: &MockServer) -> CulqiClient {
    client_with_timeout(server, 30)
}

pub fn client_with_timeout(server: &MockServer, timeout_secs: u64) -> CulqiClient {
    let config = ClientConfig {
        timeout_secs,
        ..ClientConfig::with_base_url(format!("{}/v2", server.uri()))
    };

    CulqiClient::with_config(Credentials::new(TEST_SECRET_KEY, TEST_PUBLIC_KEY), config)
        .expect("Failed to build test client")
}
