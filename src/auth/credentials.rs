//! Credential management for SimpleSwap API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "SIMPLESWAP_API_KEY";

/// API credentials: the SimpleSwap API key.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the API key for embedding into a request URL.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how the key is retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads the API key from the environment.
///
/// By default, reads from `SIMPLESWAP_API_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from the default environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to create credentials from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env_var(key_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok().filter(|key| !key.is_empty())?;

        Some(Self {
            credentials: Credentials::new(api_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
