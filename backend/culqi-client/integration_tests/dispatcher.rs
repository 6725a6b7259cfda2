use crate::helpers::{TEST_PUBLIC_KEY, TEST_SECRET_KEY, client_for, client_with_timeout};

use culqi_client::{Credential, CulqiError, ErrorKind, QueryParams};

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Dispatch against a mock Culqi host
// ============================================================================

/// **VALUE**: Reproduces the card-declined scenario over real HTTP.
///
/// **WHY THIS MATTERS**: This is the path every failed checkout takes. Headers, body
/// forwarding and the composed error message all have to line up.
///
/// **BUG THIS CATCHES**: Would catch a missing `Content-Type`, the wrong key in
/// `Authorization`, a body that is re-encoded, or a changed error format.
#[tokio::test]
async fn given_declined_card_when_dispatching_charge_then_error_carries_culqi_body() {
    // GIVEN: Culqi declines the charge
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/charges"))
        .and(header("authorization", "Bearer sk_test_abc"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"amount":100}"#))
        .respond_with(ResponseTemplate::new(402).set_body_string(r#"{"error":"card_declined"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let endpoint = client.endpoint(Credential::Secret, "charges");

    // WHEN: Dispatching through the authenticated dispatcher
    let result = client
        .dispatcher(Credential::Secret)
        .dispatch("POST", &endpoint, None, Some(br#"{"amount":100}"#.to_vec()))
        .await;

    // THEN: No bytes, and the exact composed message
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"No se pudo realizar el cargo a una tarjeta: {"error":"card_declined"}"#
    );
    assert_eq!(err.kind(), Some(ErrorKind::Card));
}

#[tokio::test]
async fn given_200_when_dispatching_then_returns_body_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/charges/chr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"chr_1"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let bytes = client
        .raw(Credential::Secret, "GET", "charges/chr_1", None, None)
        .await
        .unwrap();

    assert_eq!(bytes, br#"{"id":"chr_1"}"#);
}

/// **VALUE**: Verifies 418 surfaces as the generic unexpected error with no body.
#[tokio::test]
async fn given_418_when_dispatching_then_unexpected_error_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(418).set_body_string("I'm a teapot"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .raw(Credential::Secret, "GET", "charges", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, CulqiError::UnexpectedStatus { .. }));
    assert_eq!(err.status_code(), Some(418));
    assert!(!err.to_string().contains("teapot"));
}

#[tokio::test]
async fn given_classified_statuses_when_dispatching_then_each_error_embeds_body() {
    for status in [400u16, 401, 422, 402, 429, 404, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string(format!("body-{status}")))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .raw(Credential::Secret, "GET", "charges", None, None)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(status));
        assert!(err.to_string().ends_with(&format!(": body-{status}")));
    }
}

#[tokio::test]
async fn given_success_statuses_when_dispatching_then_bodies_pass_through() {
    for status in [200u16, 201, 202, 203, 206] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
            .mount(&server)
            .await;

        let bytes = client_for(&server)
            .raw(Credential::Secret, "POST", "charges", None, None)
            .await
            .unwrap();

        assert_eq!(bytes, b"ok", "status {status}");
    }
}

/// **VALUE**: Verifies the public dispatcher authenticates with the public key.
///
/// **BUG THIS CATCHES**: Would catch both dispatchers sharing one key after the
/// merge into a single parameterized type.
#[tokio::test]
async fn given_public_dispatcher_when_dispatching_then_sends_public_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/tokens"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .raw(Credential::Public, "POST", "tokens", None, Some(b"{}".to_vec()))
        .await
        .unwrap();
    client
        .raw(Credential::Secret, "POST", "tokens", None, Some(b"{}".to_vec()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let auth: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("authorization").unwrap().to_str().unwrap().to_string())
        .collect();

    assert_eq!(
        auth,
        vec![
            format!("Bearer {TEST_PUBLIC_KEY}"),
            format!("Bearer {TEST_SECRET_KEY}")
        ]
    );
}

#[tokio::test]
async fn given_query_params_when_dispatching_then_query_string_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/charges"))
        .and(query_param("limit", "2"))
        .and(query_param("email", "ana@test.pe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams::new().with("limit", 2).with("email", "ana@test.pe");

    client_for(&server)
        .raw(Credential::Secret, "GET", "charges", Some(&params), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=2&email=ana%40test.pe"));
}

#[tokio::test]
async fn given_invalid_method_when_dispatching_then_fails_before_network() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .raw(Credential::Secret, "GE T", "charges", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, CulqiError::InvalidMethod { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies transport failures stay distinct from classified API errors.
///
/// **WHY THIS MATTERS**: A refused connection never reached Culqi, so the charge was
/// not attempted; callers must not treat it like a decline.
#[tokio::test]
async fn given_unreachable_host_when_dispatching_then_connection_error() {
    // Non-pooled server: dropping it actually shuts the listener down.
    let server = MockServer::builder().start().await;
    let client = client_for(&server);
    drop(server);

    let err = client
        .raw(Credential::Secret, "GET", "charges", None, None)
        .await
        .unwrap_err();

    match &err {
        CulqiError::Http { is_connection, .. } => assert!(*is_connection),
        other => panic!("expected Http error, got {other:?}"),
    }
    assert_eq!(err.kind(), None);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn given_slow_upstream_when_dispatching_then_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = client_with_timeout(&server, 1)
        .raw(Credential::Secret, "GET", "charges", None, None)
        .await
        .unwrap_err();

    assert_eq!(err.error_category(), "timeout");
}
