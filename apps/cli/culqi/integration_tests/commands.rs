//! End-to-end command execution against a mocked Culqi.

use culqi::cli::{Cli, Commands};
use culqi::commands::execute;
use culqi::error::CliError;

use culqi_client::{ClientConfig, Credentials, CulqiClient};

use clap::Parser;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CulqiClient {
    let config = ClientConfig::with_base_url(format!("{}/v2", server.uri()));
    CulqiClient::with_config(Credentials::new("sk_test_cli", "pk_test_cli"), config)
        .expect("Failed to build test client")
}

fn command(args: &[&str]) -> Commands {
    let mut argv = vec!["culqi"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid arguments").command
}

/// **VALUE**: Verifies `charges get` prints the decoded charge as JSON.
#[tokio::test]
async fn given_charge_id_when_running_charges_get_then_prints_charge_json() {
    // GIVEN: Culqi knows the charge
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/charges/chr_test_1"))
        .and(header("authorization", "Bearer sk_test_cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chr_test_1",
            "amount": 1500,
            "paid": true
        })))
        .mount(&server)
        .await;

    // WHEN: Running the command
    let output = execute(&client_for(&server), &command(&["charges", "get", "chr_test_1"]))
        .await
        .unwrap();

    // THEN: Output is JSON with the charge fields
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["id"], "chr_test_1");
    assert_eq!(value["amount"], 1500);
}

#[tokio::test]
async fn given_limit_when_listing_customers_then_query_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/customers"))
        .and(query_param("limit", "2"))
        .and(query_param("email", "richard@piedpiper.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "cus_test_1"}],
            "paging": {"cursors": {"before": "cus_test_1", "after": "cus_test_1"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = execute(
        &client_for(&server),
        &command(&[
            "customers",
            "list",
            "--limit",
            "2",
            "--param",
            "email=richard@piedpiper.com",
        ]),
    )
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["data"][0]["id"], "cus_test_1");
}

/// **VALUE**: Verifies `raw secure` authenticates with the public key and sends the body.
#[tokio::test]
async fn given_raw_secure_post_when_executed_then_public_key_and_body_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/tokens"))
        .and(header("authorization", "Bearer pk_test_cli"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "richard@piedpiper.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "tkn_test_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = execute(
        &client_for(&server),
        &command(&[
            "raw",
            "secure",
            "POST",
            "tokens",
            "--body",
            r#"{"email":"richard@piedpiper.com"}"#,
        ]),
    )
    .await
    .unwrap();

    assert!(output.contains("tkn_test_1"));
}

#[tokio::test]
async fn given_non_json_response_when_raw_then_printed_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let output = execute(&client_for(&server), &command(&["raw", "api", "GET", "ping"]))
        .await
        .unwrap();

    assert_eq!(output, "pong");
}

/// **VALUE**: Verifies a malformed `--body` fails before any request is sent.
#[tokio::test]
async fn given_malformed_body_when_raw_then_json_error_and_no_request() {
    let server = MockServer::start().await;

    let err = execute(
        &client_for(&server),
        &command(&["raw", "api", "POST", "charges", "--body", "{not json"]),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Json { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies a Culqi rejection surfaces with Culqi's message and body.
///
/// **BUG THIS CATCHES**: Would catch the CLI swallowing the response body that
/// explains why a charge could not be captured.
#[tokio::test]
async fn given_culqi_rejects_capture_when_executed_then_error_carries_message_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/charges/chr_test_1/capture"))
        .respond_with(ResponseTemplate::new(400).set_body_string("ya capturado"))
        .mount(&server)
        .await;

    let err = execute(
        &client_for(&server),
        &command(&["charges", "capture", "chr_test_1"]),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "La petición tiene una sintaxis inválida: ya capturado"
    );
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn given_config_command_when_executed_with_client_then_usage_error() {
    let server = MockServer::start().await;

    let err = execute(&client_for(&server), &command(&["config", "show"]))
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 2);
}

/// **VALUE**: Verifies `raw --body` reaches Culqi byte for byte.
///
/// **BUG THIS CATCHES**: Would catch the body being re-serialized, which sorts keys
/// and rewrites numbers such as `1.10`.
#[tokio::test]
async fn given_unsorted_body_when_raw_then_bytes_sent_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/charges"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "chr_test_1"})))
        .mount(&server)
        .await;
    let sent = r#"{"source_id":"tkn_1","amount":1.10}"#;

    execute(
        &client_for(&server),
        &command(&["raw", "api", "POST", "charges", "--body", sent]),
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, sent.as_bytes());
}
