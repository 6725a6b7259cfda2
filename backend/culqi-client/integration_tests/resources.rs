use crate::helpers::client_for;

use culqi_client::{CulqiError, ErrorKind, QueryParams};
use models::{
    ChargeRequestBuilder, Currency, CustomerRequest, RefundReason, RefundRequest,
    TokenRequestBuilder,
};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Typed resource operations over the dispatcher
// ============================================================================

/// **VALUE**: Verifies tokenization goes to the secure path with the public key.
///
/// **WHY THIS MATTERS**: Culqi rejects card data sent with the secret key; the token
/// flow must mirror what a browser checkout does.
#[tokio::test]
async fn given_card_when_creating_token_then_uses_public_key_and_decodes_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/tokens"))
        .and(header("authorization", "Bearer pk_test_xyz"))
        .and(body_json(json!({
            "card_number": "4111111111111111",
            "cvv": "123",
            "expiration_month": "09",
            "expiration_year": "2030",
            "email": "richard@piedpiper.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "object": "token",
            "id": "tkn_test_1",
            "type": "card",
            "email": "richard@piedpiper.com",
            "card_number": "411111******1111",
            "last_four": "1111",
            "active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TokenRequestBuilder::default()
        .with_card_number("4111111111111111")
        .with_cvv("123")
        .with_expiration(9, 2030)
        .with_email("richard@piedpiper.com")
        .build()
        .unwrap();

    let token = client_for(&server).tokens().create(&request).await.unwrap();

    assert_eq!(token.id, "tkn_test_1");
    assert_eq!(token.last_four, "1111");
    assert!(token.active);
}

#[tokio::test]
async fn given_token_when_creating_charge_then_secret_key_and_charge_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/charges"))
        .and(header("authorization", "Bearer sk_test_abc"))
        .and(body_json(json!({
            "amount": 1000,
            "currency_code": "PEN",
            "email": "richard@piedpiper.com",
            "source_id": "tkn_test_1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "object": "charge",
            "id": "chr_test_1",
            "amount": 1000,
            "currency_code": "PEN",
            "paid": true,
            "outcome": {"type": "venta_exitosa", "code": "AUT0000"}
        })))
        .mount(&server)
        .await;

    let request = ChargeRequestBuilder::default()
        .with_amount(1000)
        .with_currency(Currency::Pen)
        .with_email("richard@piedpiper.com")
        .with_source_id("tkn_test_1")
        .build()
        .unwrap();

    let charge = client_for(&server).charges().create(&request).await.unwrap();

    assert_eq!(charge.id, "chr_test_1");
    assert!(charge.paid);
}

/// **VALUE**: Verifies list endpoints pass filters through and return the paging envelope.
#[tokio::test]
async fn given_filters_when_listing_charges_then_page_and_cursors_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/charges"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "chr_test_1", "amount": 500}],
            "paging": {
                "previous": "",
                "next": "https://api.culqi.com/v2/charges?limit=1&after=chr_test_1",
                "cursors": {"before": "chr_test_1", "after": "chr_test_1"}
            }
        })))
        .mount(&server)
        .await;

    let params = QueryParams::new().with("limit", 1);
    let page = client_for(&server)
        .charges()
        .list(Some(&params))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert!(page.paging.has_next());
    assert_eq!(page.paging.cursors.after, "chr_test_1");
}

#[tokio::test]
async fn given_authorized_charge_when_capturing_then_posts_to_capture_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/charges/chr_test_1/capture"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "chr_test_1", "capture": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let charge = client_for(&server)
        .charges()
        .capture("chr_test_1")
        .await
        .unwrap();

    assert!(charge.capture);
}

/// **VALUE**: Verifies a 404 on a typed call keeps the classified error and body.
#[tokio::test]
async fn given_unknown_customer_when_fetching_then_resource_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/customers/cus_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"object":"error"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .customers()
        .get("cus_missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Resource));
    assert_eq!(err.body(), Some(r#"{"object":"error"}"#));
}

#[tokio::test]
async fn given_customer_when_deleting_then_returns_deleted_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/customers/cus_test_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_test_1",
            "deleted": true,
            "merchant_message": "Se eliminó el cliente con ID cus_test_1 exitosamente."
        })))
        .mount(&server)
        .await;

    let deleted = client_for(&server)
        .customers()
        .delete("cus_test_1")
        .await
        .unwrap();

    assert!(deleted.deleted);
}

/// **VALUE**: Verifies request validation runs before dispatch.
///
/// **BUG THIS CATCHES**: Would catch invalid customers reaching Culqi and burning
/// rate limit on guaranteed 422s.
#[tokio::test]
async fn given_invalid_customer_when_creating_then_no_request_is_sent() {
    let server = MockServer::start().await;
    let request = CustomerRequest {
        first_name: "Richard".into(),
        last_name: "Hendricks".into(),
        email: "not-an-email".into(),
        address: "Av. Lima 123".into(),
        address_city: "Lima".into(),
        country_code: "PE".into(),
        phone_number: "999999999".into(),
        metadata: Default::default(),
    };

    let err = client_for(&server)
        .customers()
        .create(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, CulqiError::Model(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_path_traversal_id_when_fetching_then_rejected_locally() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .refunds()
        .get("../charges")
        .await
        .unwrap_err();

    assert!(matches!(err, CulqiError::Model(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_refund_when_created_then_reason_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/refunds"))
        .and(body_json(json!({
            "amount": 500,
            "charge_id": "chr_test_1",
            "reason": "duplicado"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "object": "refund",
            "id": "ref_test_1",
            "charge_id": "chr_test_1",
            "amount": 500,
            "reason": "duplicado"
        })))
        .mount(&server)
        .await;

    let request = RefundRequest::new("chr_test_1", 500, RefundReason::Duplicado).unwrap();
    let refund = client_for(&server).refunds().create(&request).await.unwrap();

    assert_eq!(refund.id, "ref_test_1");
    assert_eq!(refund.reason, Some(RefundReason::Duplicado));
}

#[tokio::test]
async fn given_success_with_unexpected_shape_when_decoding_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/charges/chr_test_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .charges()
        .get("chr_test_1")
        .await
        .unwrap_err();

    assert!(matches!(err, CulqiError::Json { .. }));
}

#[tokio::test]
async fn given_no_filters_when_listing_refunds_then_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/refunds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "ref_test_1", "reason": "solicitud_comprador"}],
            "paging": {"cursors": {"before": "ref_test_1", "after": "ref_test_1"}}
        })))
        .mount(&server)
        .await;

    let page = client_for(&server).refunds().list(None).await.unwrap();

    assert_eq!(page.data[0].reason, Some(RefundReason::SolicitudComprador));
    assert!(!page.paging.has_next());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}
