//! Culqi key format validation.
//!
//! Validates keys BEFORE the first request so that a pasted placeholder or a
//! swapped secret/public key fails at startup instead of as a 401 later.

use crate::credentials::Credential;
use crate::error::{CredentialsError, KeyValidationFailure};

use common::RedactedApiKey;

const SECRET_PREFIXES: &[&str] = &["sk_test_", "sk_live_"];
const PUBLIC_PREFIXES: &[&str] = &["pk_test_", "pk_live_"];
pub const MIN_KEY_LENGTH: usize = 16;

/// Validation result for a key.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(KeyValidationFailure),
}

pub struct KeyValidator {
    credential: Credential,
    expected_prefixes: &'static [&'static str],
    min_length: usize,
    max_length: usize,
}

impl KeyValidator {
    pub fn for_credential(credential: Credential) -> Self {
        let expected_prefixes = match credential {
            Credential::Secret => SECRET_PREFIXES,
            Credential::Public => PUBLIC_PREFIXES,
        };

        Self {
            credential,
            expected_prefixes,
            // Prefix plus at least 8 characters. Short fixture keys such as
            // `sk_test_abc` must go through `Credentials::new`, which skips checks.
            min_length: MIN_KEY_LENGTH,
            max_length: 128,
        }
    }

    pub fn validate(&self, key: &str) -> ValidationResult {
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return ValidationResult::Invalid(KeyValidationFailure::Empty);
        }

        if trimmed.len() < self.min_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooShort {
                min: self.min_length,
                actual: trimmed.len(),
            });
        }

        if trimmed.len() > self.max_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooLong {
                max: self.max_length,
                actual: trimmed.len(),
            });
        }

        if !self.expected_prefixes.iter().any(|p| trimmed.starts_with(p)) {
            let actual: String = trimmed.chars().take(8).collect();
            return ValidationResult::Invalid(KeyValidationFailure::InvalidPrefix {
                expected: self.expected_prefixes,
                actual,
            });
        }

        if let Some(pattern) = detect_placeholder(trimmed) {
            return ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected { pattern });
        }

        if !is_valid_key_chars(trimmed) {
            return ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters);
        }

        ValidationResult::Valid
    }

    /// Validate and wrap the trimmed key.
    #[track_caller]
    pub fn validate_and_wrap(&self, key: String) -> Result<RedactedApiKey, CredentialsError> {
        match self.validate(&key) {
            ValidationResult::Valid => Ok(RedactedApiKey::new(key.trim())),
            ValidationResult::Invalid(reason) => {
                Err(CredentialsError::key_validation(self.credential, reason))
            }
        }
    }
}

/// Detect common placeholder patterns left over from `.env.example` files.
fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("...", "ellipsis"),
        ("your_key", "your_key"),
        ("your-key", "your-key"),
        ("<your", "<your...>"),
        ("xxxx", "xxxx"),
        ("placeholder", "placeholder"),
        ("changeme", "changeme"),
        ("replace", "replace"),
    ];

    PATTERNS
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, name)| *name)
}

/// Culqi keys use ASCII letters, digits, `_` and `-`.
fn is_valid_key_chars(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}
