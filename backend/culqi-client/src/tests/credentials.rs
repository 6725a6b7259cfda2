// Unit tests for credential validation and environment loading

use crate::credentials::validation::{KeyValidator, MIN_KEY_LENGTH, ValidationResult};
use crate::credentials::{PUBLIC_KEY_ENV, SECRET_KEY_ENV};
use crate::error::{CredentialsError, KeyValidationFailure};
use crate::{Credential, Credentials};

use serial_test::serial;

const SECRET: &str = "sk_test_UTCQSGcXW8bCyU59";
const PUBLIC: &str = "pk_test_vzMuTHoueOMlgUPj";

// ============================================
// UNIT TESTS: KeyValidator
// ============================================

#[test]
fn given_well_formed_keys_when_validated_then_valid() {
    assert_eq!(
        KeyValidator::for_credential(Credential::Secret).validate(SECRET),
        ValidationResult::Valid
    );
    assert_eq!(
        KeyValidator::for_credential(Credential::Public).validate(PUBLIC),
        ValidationResult::Valid
    );
}

/// **VALUE**: Verifies swapped keys are caught before any request is made.
///
/// **WHY THIS MATTERS**: A public key in `CULQI_SECRET_KEY` makes every charge fail with
/// 401; catching it at startup gives a precise message instead.
#[test]
fn given_public_key_as_secret_when_validated_then_invalid_prefix() {
    let result = KeyValidator::for_credential(Credential::Secret).validate(PUBLIC);

    match result {
        ValidationResult::Invalid(KeyValidationFailure::InvalidPrefix { actual, .. }) => {
            assert_eq!(actual, "pk_test_");
        }
        other => panic!("expected InvalidPrefix, got {other:?}"),
    }
}

#[test]
fn given_malformed_keys_when_validated_then_specific_failure() {
    let validator = KeyValidator::for_credential(Credential::Secret);

    assert_eq!(
        validator.validate("   "),
        ValidationResult::Invalid(KeyValidationFailure::Empty)
    );
    assert!(matches!(
        validator.validate("sk_test_1"),
        ValidationResult::Invalid(KeyValidationFailure::TooShort { min: 16, actual: 9 })
    ));
    assert!(matches!(
        validator.validate(&format!("sk_live_{}", "a".repeat(200))),
        ValidationResult::Invalid(KeyValidationFailure::TooLong { .. })
    ));
    assert!(matches!(
        validator.validate("sk_test_your_key_here"),
        ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected { .. })
    ));
    assert_eq!(
        validator.validate("sk_test_abc$def%ghi"),
        ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters)
    );
}

/// **VALUE**: Pins the length floor and the accepted character set.
///
/// **BUG THIS CATCHES**: Would catch the floor drifting silently, or `-` being
/// dropped from the allowed characters.
#[test]
fn given_short_fixture_key_when_validated_then_too_short_but_unchecked_path_accepts() {
    let validator = KeyValidator::for_credential(Credential::Secret);

    assert_eq!(
        validator.validate("sk_test_abc"),
        ValidationResult::Invalid(KeyValidationFailure::TooShort {
            min: MIN_KEY_LENGTH,
            actual: 11,
        })
    );
    assert_eq!(
        validator.validate("sk_test_abc-DEF_123"),
        ValidationResult::Valid
    );

    let credentials = Credentials::new("sk_test_abc", "pk_test_xyz");
    assert_eq!(credentials.secret_key().as_str(), "sk_test_abc");
}

#[test]
fn given_padded_key_when_wrapped_then_whitespace_is_trimmed() {
    let key = KeyValidator::for_credential(Credential::Public)
        .validate_and_wrap(format!("  {PUBLIC}\n"))
        .unwrap();

    assert_eq!(key.as_str(), PUBLIC);
}

// ============================================
// UNIT TESTS: Credentials
// ============================================

#[test]
fn given_credentials_when_selecting_key_then_matches_credential() {
    let credentials = Credentials::new("sk_test_abc", "pk_test_abc");

    assert_eq!(credentials.key_for(Credential::Secret).as_str(), "sk_test_abc");
    assert_eq!(credentials.key_for(Credential::Public).as_str(), "pk_test_abc");
    assert!(!credentials.is_live());
}

#[test]
fn given_invalid_secret_when_validated_then_error_names_credential_not_value() {
    let err = Credentials::validated("sk_test_xxxxxxxxxxxx".into(), PUBLIC.into()).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("secret key"));
    assert!(!message.contains("sk_test_xxxxxxxxxxxx"));
}

/// **VALUE**: Verifies keys are read from the environment and validated.
///
/// **BUG THIS CATCHES**: Would catch the two variables being swapped during loading.
#[test]
#[serial]
fn given_env_vars_when_loading_credentials_then_keys_are_wrapped() {
    // SAFETY: serialized with every other test touching these variables.
    unsafe {
        std::env::set_var(SECRET_KEY_ENV, SECRET);
        std::env::set_var(PUBLIC_KEY_ENV, PUBLIC);
    }

    let credentials = Credentials::from_env().unwrap();

    assert_eq!(credentials.secret_key().as_str(), SECRET);
    assert_eq!(credentials.public_key().as_str(), PUBLIC);

    unsafe {
        std::env::remove_var(SECRET_KEY_ENV);
        std::env::remove_var(PUBLIC_KEY_ENV);
    }
}

#[test]
#[serial]
fn given_missing_public_key_when_loading_credentials_then_missing_error() {
    unsafe {
        std::env::set_var(SECRET_KEY_ENV, SECRET);
        std::env::remove_var(PUBLIC_KEY_ENV);
    }

    let err = Credentials::from_env().unwrap_err();

    match err {
        CredentialsError::Missing { credential, var, .. } => {
            assert_eq!(credential, Credential::Public);
            assert_eq!(var, PUBLIC_KEY_ENV);
        }
        other => panic!("expected Missing, got {other:?}"),
    }

    unsafe {
        std::env::remove_var(SECRET_KEY_ENV);
    }
}
