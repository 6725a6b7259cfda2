//! Error types for credential loading.
//!
//! Key design decisions:
//! - Key values never appear in messages, only the variable name and the failure reason
//! - `#[track_caller]` for automatic location capture

use crate::credentials::Credential;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialsError {
    #[error("Environment load failed: {message} {location}")]
    EnvLoad {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing {credential} key: set {var} {location}")]
    Missing {
        credential: Credential,
        var: &'static str,
        location: ErrorLocation,
    },

    #[error("Key validation failed for {credential} key: {reason} {location}")]
    KeyValidation {
        credential: Credential,
        reason: KeyValidationFailure,
        location: ErrorLocation,
    },
}

/// Specific reasons for key validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationFailure {
    Empty,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    InvalidPrefix { expected: &'static [&'static str], actual: String },
    PlaceholderDetected { pattern: &'static str },
    InvalidCharacters,
}

impl std::fmt::Display for KeyValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key is empty"),
            Self::TooShort { min, actual } => {
                write!(f, "key too short ({} chars, minimum {})", actual, min)
            }
            Self::TooLong { max, actual } => {
                write!(f, "key too long ({} chars, maximum {})", actual, max)
            }
            Self::InvalidPrefix { expected, actual } => {
                write!(f, "expected prefix {}, got '{}'", expected.join(" or "), actual)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
            Self::InvalidCharacters => write!(f, "contains invalid characters"),
        }
    }
}

impl CredentialsError {
    #[track_caller]
    pub fn env_load(message: impl Into<String>) -> Self {
        CredentialsError::EnvLoad {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing(credential: Credential, var: &'static str) -> Self {
        CredentialsError::Missing {
            credential,
            var,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn key_validation(credential: Credential, reason: KeyValidationFailure) -> Self {
        CredentialsError::KeyValidation {
            credential,
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
