use crate::{ClientConfig, Credential, Credentials, CulqiClient, CULQI_API_BASE_URL};

fn client_with(config: ClientConfig) -> CulqiClient {
    CulqiClient::with_config(Credentials::new("sk_test_abc", "pk_test_abc"), config).unwrap()
}

/// **VALUE**: Verifies each credential is routed to its own host.
///
/// **WHY THIS MATTERS**: Sending the secret key to the tokenization host (or the public
/// key to the charges API) produces 401s that look like bad keys.
#[test]
fn given_default_client_when_resolving_endpoints_then_hosts_follow_credential() {
    let client = client_with(ClientConfig::default());

    assert_eq!(
        client.endpoint(Credential::Secret, "charges"),
        "https://api.culqi.com/v2/charges"
    );
    assert_eq!(
        client.endpoint(Credential::Public, "/tokens"),
        "https://secure.culqi.com/v2/tokens"
    );
    assert_eq!(client.dispatcher(Credential::Secret).credential(), Credential::Secret);
    assert_eq!(client.dispatcher(Credential::Public).credential(), Credential::Public);
}

#[test]
fn given_base_url_with_trailing_slash_when_joining_then_single_separator() {
    let client = client_with(ClientConfig::with_base_url("http://127.0.0.1:9000/v2/"));

    assert_eq!(
        client.endpoint(Credential::Secret, "/customers"),
        "http://127.0.0.1:9000/v2/customers"
    );
}

#[test]
fn given_invalid_config_when_building_client_then_returns_config_error() {
    let config = ClientConfig {
        timeout_secs: 0,
        ..ClientConfig::default()
    };

    let result = CulqiClient::with_config(Credentials::new("sk_test_abc", "pk_test_abc"), config);

    assert!(matches!(result.unwrap_err(), crate::CulqiError::Config(_)));
}

#[test]
fn given_new_client_when_inspecting_config_then_defaults_apply() {
    let client = CulqiClient::new(Credentials::new("sk_test_abc", "pk_test_abc")).unwrap();

    assert_eq!(client.config().api_base_url, CULQI_API_BASE_URL);
    assert_eq!(client.config().timeout_secs, 30);
}

/// **VALUE**: Verifies Debug output of the whole client never contains keys.
#[test]
fn given_client_when_debug_formatted_then_keys_are_redacted() {
    let client = CulqiClient::new(Credentials::new(
        "sk_live_supersecret123",
        "pk_live_publicvalue456",
    ))
    .unwrap();

    let debug = format!("{client:?}");

    assert!(!debug.contains("supersecret123"));
    assert!(!debug.contains("publicvalue456"));
}
