//! Shared primitives for the Culqi client workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, secret handling, HTTP status helpers
//! - **models**: Culqi request/response records and the pagination envelope
//! - **culqi-client**: credential loading, request dispatch, error classification
//! - **culqi**: command-line front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
