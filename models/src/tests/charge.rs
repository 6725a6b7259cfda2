use crate::{ChargeRequestBuilder, Currency, ModelError};

use serde_json::{Value, json};

fn valid_builder() -> ChargeRequestBuilder {
    ChargeRequestBuilder::default()
        .with_amount(1000)
        .with_currency(Currency::Pen)
        .with_email("richard@piedpiper.com")
        .with_source_id("tkn_test_abc123")
}

/// **VALUE**: Verifies the serialized body matches the field names Culqi expects.
///
/// **WHY THIS MATTERS**: The dispatcher forwards whatever bytes it is given. A renamed
/// field (e.g. `currency` instead of `currency_code`) only surfaces as a 422 from Culqi.
///
/// **BUG THIS CATCHES**: Would catch serde renames, or optional fields serialized as `null`.
#[test]
fn given_valid_builder_when_built_then_serializes_culqi_field_names() {
    let request = valid_builder()
        .with_description("Venta de prueba")
        .with_metadata("order_id", "42")
        .build()
        .unwrap();

    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "amount": 1000,
            "currency_code": "PEN",
            "email": "richard@piedpiper.com",
            "source_id": "tkn_test_abc123",
            "description": "Venta de prueba",
            "metadata": {"order_id": "42"}
        })
    );
}

#[test]
fn given_zero_amount_when_building_charge_then_returns_validation_error() {
    let result = valid_builder().with_amount(0).build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Amount must be greater than zero");
        }
    }
}

#[test]
fn given_missing_source_when_building_charge_then_returns_validation_error() {
    let result = ChargeRequestBuilder::default()
        .with_amount(500)
        .with_email("a@b.pe")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Source id is required"),
    }
}

/// **VALUE**: Verifies overly long descriptions are rejected before the request is sent.
///
/// **BUG THIS CATCHES**: Would catch byte-length counting; "ñ" is two bytes but one character.
#[test]
fn given_description_length_when_building_charge_then_limit_counts_characters() {
    let at_limit = "ñ".repeat(80);
    let over_limit = "a".repeat(81);

    assert!(valid_builder().with_description(at_limit).build().is_ok());
    assert!(valid_builder().with_description(over_limit).build().is_err());
}

#[test]
fn given_charge_json_when_decoded_then_missing_fields_default() {
    let charge: crate::Charge = serde_json::from_value(json!({
        "object": "charge",
        "id": "chr_test_1",
        "amount": 1000,
        "amount_refunded": 200,
        "currency_code": "USD",
        "paid": true,
        "outcome": {"type": "venta_exitosa", "code": "AUT0000", "user_message": "Su compra ha sido exitosa."}
    }))
    .unwrap();

    assert_eq!(charge.id, "chr_test_1");
    assert_eq!(charge.currency_code, Some(Currency::Usd));
    assert_eq!(charge.outcome.unwrap().outcome_type, "venta_exitosa");
    assert!(charge.metadata.is_empty());
}

#[test]
fn given_partially_refunded_paid_charge_when_checked_then_is_refundable() {
    let charge = crate::Charge {
        id: "chr_1".into(),
        amount: 1000,
        amount_refunded: 400,
        paid: true,
        ..Default::default()
    };

    assert!(charge.is_refundable());
    assert!(
        !crate::Charge {
            amount_refunded: 1000,
            ..charge
        }
        .is_refundable()
    );
}

#[test]
fn given_no_currency_when_defaulted_then_soles() {
    assert_eq!(Currency::default(), Currency::Pen);
    assert_eq!(Currency::default().to_string(), "PEN");
}
