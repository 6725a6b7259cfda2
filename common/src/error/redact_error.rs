use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret wrapper is asked to leave the process.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Refusing to serialize {type_name}: read the key with as_str() {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
