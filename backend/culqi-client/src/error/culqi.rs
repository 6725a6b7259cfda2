//! Errors produced while dispatching a request to Culqi.
//!
//! Key design decisions:
//! - `Api` renders exactly as `"<kind message>: <response body>"`
//! - `UnexpectedStatus` renders the bare Unexpected message, the body is not included
//! - Transport failures keep the underlying `reqwest::Error` as their source
//! - All errors include ErrorLocation for debugging

use crate::classify::ErrorKind;
use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CulqiError {
    /// Culqi answered with a status code from the classified set.
    #[error("{kind}: {body}")]
    Api {
        kind: ErrorKind,
        status_code: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    /// Culqi answered outside both the classified set and `[200, 206]`.
    #[error("{}", ErrorKind::Unexpected.message())]
    UnexpectedStatus {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {source} {location}")]
    Http {
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid Method Error: '{method}' {location}")]
    InvalidMethod {
        method: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CulqiError {
    #[track_caller]
    pub fn api(kind: ErrorKind, status_code: u16, body: impl Into<String>) -> Self {
        CulqiError::Api {
            kind,
            status_code: HttpStatusCode(status_code),
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_status(status_code: u16) -> Self {
        CulqiError::UnexpectedStatus {
            status_code: HttpStatusCode(status_code),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_method(method: impl Into<String>) -> Self {
        CulqiError::InvalidMethod {
            method: method.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The classified kind, if Culqi produced a response at all.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CulqiError::Api { kind, .. } => Some(*kind),
            CulqiError::UnexpectedStatus { .. } => Some(ErrorKind::Unexpected),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CulqiError::Api { status_code, .. } => Some(status_code.0),
            CulqiError::UnexpectedStatus { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    /// Raw response body attached to a classified error.
    pub fn body(&self) -> Option<&str> {
        match self {
            CulqiError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if this error is retryable based on error category, NOT string content.
    pub fn is_retryable(&self) -> bool {
        match self {
            CulqiError::Api { kind, .. } => kind.is_retryable(),
            CulqiError::Http {
                is_timeout,
                is_connection,
                ..
            } => *is_timeout || *is_connection,
            CulqiError::UnexpectedStatus { .. } => false,
            CulqiError::InvalidMethod { .. } => false,
            CulqiError::UrlParse { .. } => false,
            CulqiError::Json { .. } => false,
            CulqiError::Model(_) => false,
            CulqiError::Config(_) => false,
        }
    }

    /// Get error category for logging.
    pub fn error_category(&self) -> &'static str {
        match self {
            CulqiError::Api { kind, .. } => kind.category(),
            CulqiError::UnexpectedStatus { .. } => ErrorKind::Unexpected.category(),
            CulqiError::Http {
                is_timeout: true, ..
            } => "timeout",
            CulqiError::Http {
                is_connection: true,
                ..
            } => "connection",
            CulqiError::Http { .. } => "transport",
            CulqiError::InvalidMethod { .. } => "invalid_method",
            CulqiError::UrlParse { .. } => "url_parse",
            CulqiError::Json { .. } => "json",
            CulqiError::Model(_) => "validation",
            CulqiError::Config(_) => "config",
        }
    }
}

impl From<url::ParseError> for CulqiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        CulqiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for CulqiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        CulqiError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

impl From<serde_json::Error> for CulqiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CulqiError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
