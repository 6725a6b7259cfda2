//! Client for the Culqi v2 payments API.
//!
//! Every call goes through a [`Dispatcher`]: it appends query parameters,
//! authenticates with the secret or public key, buffers the response and
//! maps the status code onto a [`ErrorKind`]. Typed resource operations
//! (charges, tokens, customers, refunds) are thin layers over it.

pub mod classify;
pub mod client;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod resources;

#[cfg(test)]
mod tests;

pub use classify::{ErrorKind, classify};
pub use client::CulqiClient;
pub use config::ClientConfig;
pub use credentials::{Credential, Credentials};
pub use dispatch::{Dispatcher, QueryParams};
pub use error::culqi::CulqiError;

/// Informational only, never transmitted.
pub const CULQI_API_VERSION: &str = "v2.0";
pub const CULQI_API_HOSTNAME: &str = "api.culqi.com";
pub const CULQI_SECURE_HOSTNAME: &str = "secure.culqi.com";
pub const CULQI_API_BASE_URL: &str =
    const_format::concatcp!("https://", CULQI_API_HOSTNAME, "/v2");
pub const CULQI_SECURE_BASE_URL: &str =
    const_format::concatcp!("https://", CULQI_SECURE_HOSTNAME, "/v2");
