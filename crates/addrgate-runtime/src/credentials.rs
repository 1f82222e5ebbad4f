//! Secure handling of the verification-service API key.
//!
//! The key is the only credential this system manages. Wrapping it at load
//! time guarantees:
//!
//! - **No accidental logging**: Debug/Display show `[REDACTED]`
//! - **Memory safety**: the value is zeroed on drop via the `secrecy` crate
//! - **Explicit exposure**: the raw value is only reachable through
//!   [`ApiCredential::expose`], at the point the request is signed

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::ConfigError;

/// Environment variable holding the Address Validation API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Supplied through [`ClientConfig`](crate::client::ClientConfig).
    Config,
    /// Loaded from the process environment.
    Environment,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
        }
    }
}

/// A securely-stored API credential.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
}

impl ApiCredential {
    /// Wrap a key supplied programmatically or through configuration.
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
        }
    }

    /// Load the key from [`API_KEY_ENV`].
    ///
    /// Missing credential is a construction-time failure: it is checked
    /// once at client setup, never per call.
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(API_KEY_ENV)
            .map(|v| Self::new(v, CredentialSource::Environment))
            .map_err(|_| ConfigError::MissingCredential { env_var: API_KEY_ENV })
    }

    /// Use the configured key if present, otherwise fall back to the
    /// environment.
    pub fn from_config_or_env(configured: Option<&str>) -> Result<Self, ConfigError> {
        match configured {
            Some(key) => Ok(Self::new(key, CredentialSource::Config)),
            None => Self::from_env(),
        }
    }

    /// Expose the credential value for use in the API call.
    ///
    /// Only call this at the point where the credential is actually needed.
    /// Never store the exposed value.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Whether the stored credential is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API key from {} [REDACTED]", self.source)
    }
}
