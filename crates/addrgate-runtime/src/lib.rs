//! # addrgate-runtime
//!
//! The side-effecting half of addrgate: the verification client, credential
//! handling, and the validator surface a guard framework plugs in.
//!
//! The deterministic decision logic lives in `addrgate-core`; this crate
//! performs exactly one outbound call per validation and hands the decoded
//! result to the classifier. No caching, no retries, no internal
//! concurrency — retry and re-prompt policy belongs to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use addrgate_runtime::{AddressValidator, GoogleAddressClient, Validator};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let client = GoogleAddressClient::from_env()?;
//! let validator = AddressValidator::new(Arc::new(client));
//!
//! let outcome = validator
//!     .validate("1 Hacker Way, Menlo Park, CA", &HashMap::new())
//!     .await?;
//! ```

use thiserror::Error;

pub mod client;
pub mod credentials;
pub mod registry;
pub mod validator;

pub use client::{ClientConfig, GoogleAddressClient};
pub use credentials::{ApiCredential, CredentialSource, API_KEY_ENV};
pub use registry::{AddressValidatorFactory, ValidatorFactory, ValidatorRegistry};
pub use validator::{AddressValidator, AddressVerifier, Validator};

/// Construction-time failures. Fatal, surfaced immediately, never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key not set: configure '{env_var}' environment variable")]
    MissingCredential { env_var: &'static str },

    #[error("base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("unknown validator '{name}', available: {available}")]
    UnknownValidator { name: String, available: String },
}

/// Remote-call failures, wrapped at the client boundary.
///
/// Not retried internally; the invoking framework decides whether to retry
/// or re-prompt. A response shape the decoder cannot interpret is a
/// [`ServiceError::Malformed`], never a classifier input.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("address verification request failed")]
    Http(#[source] reqwest::Error),

    #[error("address verification API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("malformed address verification response: {0}")]
    Malformed(String),
}
