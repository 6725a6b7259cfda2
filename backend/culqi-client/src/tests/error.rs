// Unit tests for CulqiError helpers
// Retryability and categories are derived from variants, never from message text

use crate::{CulqiError, ErrorKind};

use models::ModelError;

#[test]
fn given_classified_errors_when_checking_retryable_then_follows_kind() {
    assert!(CulqiError::api(ErrorKind::LimitApi, 429, "").is_retryable());
    assert!(CulqiError::api(ErrorKind::Api, 503, "").is_retryable());
    assert!(!CulqiError::api(ErrorKind::Card, 402, "").is_retryable());
    assert!(!CulqiError::unexpected_status(418).is_retryable());
}

#[test]
fn given_errors_when_categorized_then_uses_kind_category() {
    assert_eq!(
        CulqiError::api(ErrorKind::Authentication, 401, "").error_category(),
        "authentication"
    );
    assert_eq!(
        CulqiError::unexpected_status(504).error_category(),
        "unexpected"
    );
    assert_eq!(
        CulqiError::invalid_method("GE T").error_category(),
        "invalid_method"
    );
    assert_eq!(
        CulqiError::from(ModelError::validation("bad")).error_category(),
        "validation"
    );
}

/// **VALUE**: Verifies error constructors record the caller's location.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[track_caller]`, which would make every
/// error point into culqi.rs.
#[test]
fn given_constructor_when_called_then_location_points_at_caller() {
    let err = CulqiError::invalid_method("BAD METHOD");

    match err {
        CulqiError::InvalidMethod { location, method } => {
            assert!(location.file.ends_with("error.rs"));
            assert!(location.file.contains("tests"));
            assert_eq!(method, "BAD METHOD");
        }
        other => panic!("expected InvalidMethod, got {other:?}"),
    }
}

#[test]
fn given_non_api_error_when_querying_response_fields_then_none() {
    let err = CulqiError::invalid_method("BAD METHOD");

    assert_eq!(err.kind(), None);
    assert_eq!(err.status_code(), None);
    assert_eq!(err.body(), None);
    assert!(err.to_string().contains("'BAD METHOD'"));
}
