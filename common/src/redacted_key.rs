//! API key handling with redacted Debug and Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// Characters of a key that are safe to show (Culqi keys start with `sk_live_`, `pk_test_`, ...).
const VISIBLE_PREFIX_LEN: usize = 8;

/// A Culqi API key that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the `Authorization` header.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Environment prefix of the key (e.g. `sk_test_`), safe to log.
    pub fn visible_prefix(&self) -> &str {
        let end = self
            .inner
            .char_indices()
            .nth(VISIBLE_PREFIX_LEN)
            .map_or(self.inner.len(), |(idx, _)| idx);
        &self.inner[..end]
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Keys never end up in culqi.json or printed responses.
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::SerializationRefused {
            type_name: "RedactedApiKey",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
