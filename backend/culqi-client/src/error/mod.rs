pub mod config;
pub mod credentials;
pub mod culqi;

pub use credentials::{CredentialsError, KeyValidationFailure};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Culqi(#[from] culqi::CulqiError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Credentials(#[from] credentials::CredentialsError),
}
