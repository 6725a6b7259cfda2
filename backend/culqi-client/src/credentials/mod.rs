//! Culqi key pair handling.
//!
//! # Sources
//! - Explicit values via [`Credentials::new`] / [`Credentials::validated`]
//! - Environment via [`Credentials::from_env`], loading `.env` from the cwd or
//!   the executable directory first
//!
//! # Security
//! - Keys wrapped in RedactedApiKey (safe Debug impl)
//! - Keys zeroized on drop
//! - Never logged or serialized

pub mod validation;

use crate::error::CredentialsError;

use common::RedactedApiKey;

use validation::KeyValidator;

use std::env;
use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const SECRET_KEY_ENV: &str = "CULQI_SECRET_KEY";
pub const PUBLIC_KEY_ENV: &str = "CULQI_PUBLIC_KEY";

/// Which half of the key pair authenticates a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Credential {
    /// Secret key, used against the standard API host.
    Secret,
    /// Public key, used against the secure tokenization host.
    Public,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Secret => write!(f, "secret"),
            Credential::Public => write!(f, "public"),
        }
    }
}

/// The secret/public key pair. Immutable once built.
#[derive(Debug, Clone)]
pub struct Credentials {
    secret_key: RedactedApiKey,
    public_key: RedactedApiKey,
}

impl Credentials {
    /// Wrap keys without format checks.
    pub fn new(secret_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            secret_key: RedactedApiKey::new(secret_key),
            public_key: RedactedApiKey::new(public_key),
        }
    }

    /// Wrap keys after checking their Culqi format.
    #[track_caller]
    pub fn validated(secret_key: String, public_key: String) -> Result<Self, CredentialsError> {
        let secret_key = KeyValidator::for_credential(Credential::Secret).validate_and_wrap(secret_key)?;
        let public_key = KeyValidator::for_credential(Credential::Public).validate_and_wrap(public_key)?;

        let credentials = Self {
            secret_key,
            public_key,
        };

        if credentials.is_mixed_environment() {
            warn!(
                "Secret key ({}) and public key ({}) belong to different environments",
                credentials.secret_key.visible_prefix(),
                credentials.public_key.visible_prefix()
            );
        }

        Ok(credentials)
    }

    /// Load and validate `CULQI_SECRET_KEY` and `CULQI_PUBLIC_KEY`.
    ///
    /// A missing `.env` file is not an error; a missing variable is.
    pub fn from_env() -> Result<Self, CredentialsError> {
        if try_load_dotenv().is_none() {
            debug!("No .env file found - will check existing environment variables");
        }

        let secret_key = read_var(Credential::Secret, SECRET_KEY_ENV)?;
        let public_key = read_var(Credential::Public, PUBLIC_KEY_ENV)?;

        let credentials = Self::validated(secret_key, public_key)?;

        info!(
            "Loaded Culqi keys: secret {} ({} chars), public {} ({} chars)",
            credentials.secret_key.visible_prefix(),
            credentials.secret_key.len(),
            credentials.public_key.visible_prefix(),
            credentials.public_key.len()
        );

        Ok(credentials)
    }

    pub fn secret_key(&self) -> &RedactedApiKey {
        &self.secret_key
    }

    pub fn public_key(&self) -> &RedactedApiKey {
        &self.public_key
    }

    pub fn key_for(&self, credential: Credential) -> &RedactedApiKey {
        match credential {
            Credential::Secret => &self.secret_key,
            Credential::Public => &self.public_key,
        }
    }

    /// Both keys are production (`_live_`) keys.
    pub fn is_live(&self) -> bool {
        self.secret_key.as_str().starts_with("sk_live_")
            && self.public_key.as_str().starts_with("pk_live_")
    }

    fn is_mixed_environment(&self) -> bool {
        let secret_live = self.secret_key.as_str().starts_with("sk_live_");
        let public_live = self.public_key.as_str().starts_with("pk_live_");
        secret_live != public_live
    }
}

#[track_caller]
fn read_var(credential: Credential, var: &'static str) -> Result<String, CredentialsError> {
    match env::var(var) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(CredentialsError::missing(credential, var)),
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {} contains invalid unicode", var);
            Err(CredentialsError::env_load(format!(
                "{var} contains invalid unicode"
            )))
        }
    }
}

/// Attempts to load .env from the current directory, then the executable directory.
fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_dir = env::current_exe().ok()?.parent()?.to_path_buf();
    let env_path = exe_dir.join(".env");

    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
