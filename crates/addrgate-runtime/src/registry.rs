//! Validator registry: name → factory lookup owned by the surrounding
//! framework.
//!
//! New validators register factories instead of being added to an enum;
//! conforming to [`Validator`](crate::Validator) is the whole contract.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = ValidatorRegistry::with_defaults();
//! let validator = registry.create("valid-address", &serde_json::json!({}))?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::client::{ClientConfig, GoogleAddressClient};
use crate::credentials::API_KEY_ENV;
use crate::validator::{AddressValidator, Validator};
use crate::ConfigError;

/// Factory for creating validators from configuration.
///
/// Each factory is responsible for validating its configuration format,
/// creating validator instances, and providing a unique name.
pub trait ValidatorFactory: Send + Sync {
    /// Unique name this validator registers under.
    fn validator_name(&self) -> &'static str;

    /// Create a validator instance from JSON configuration.
    fn create(&self, config: &JsonValue) -> Result<Arc<dyn Validator>, ConfigError>;

    /// Validate configuration without creating a validator.
    ///
    /// Use this for fast config checks during startup.
    fn validate_config(&self, config: &JsonValue) -> Result<(), ConfigError>;

    /// Human-readable description of this validator.
    fn description(&self) -> &'static str {
        "Validator"
    }
}

/// Registry of available validator factories.
#[derive(Default)]
pub struct ValidatorRegistry {
    factories: BTreeMap<String, Arc<dyn ValidatorFactory>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in validators registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AddressValidatorFactory));
        registry
    }

    /// Register a validator factory.
    ///
    /// A factory with the same name replaces the existing one.
    pub fn register(&mut self, factory: Arc<dyn ValidatorFactory>) {
        self.factories
            .insert(factory.validator_name().to_string(), factory);
    }

    /// Create a validator by name.
    pub fn create(
        &self,
        name: &str,
        config: &JsonValue,
    ) -> Result<Arc<dyn Validator>, ConfigError> {
        self.factories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownValidator {
                name: name.to_string(),
                available: self.available_names().join(", "),
            })?
            .create(config)
    }

    /// Validate configuration for a named validator.
    pub fn validate(&self, name: &str, config: &JsonValue) -> Result<(), ConfigError> {
        self.factories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownValidator {
                name: name.to_string(),
                available: self.available_names().join(", "),
            })?
            .validate_config(config)
    }

    /// List registered validator names.
    pub fn available_names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Check whether a validator name is registered.
    pub fn has_validator(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.available_names())
            .finish()
    }
}

/// Factory for the Google-backed address validator.
///
/// ## Configuration Format
/// ```json
/// {
///   "api_key": "...",        // Optional, falls back to GOOGLE_MAPS_API_KEY env
///   "region_code": "US",     // Optional
///   "base_url": "https://..."// Optional, custom API endpoint
/// }
/// ```
pub struct AddressValidatorFactory;

impl AddressValidatorFactory {
    fn client_config(config: &JsonValue) -> ClientConfig {
        let mut client_config = ClientConfig::default();
        if let Some(key) = config["api_key"].as_str() {
            client_config.api_key = Some(key.to_string());
        }
        if let Some(region) = config["region_code"].as_str() {
            client_config.region_code = region.to_string();
        }
        if let Some(url) = config["base_url"].as_str() {
            client_config.base_url = url.to_string();
        }
        client_config
    }
}

impl ValidatorFactory for AddressValidatorFactory {
    fn validator_name(&self) -> &'static str {
        AddressValidator::NAME
    }

    fn create(&self, config: &JsonValue) -> Result<Arc<dyn Validator>, ConfigError> {
        let client = GoogleAddressClient::new(Self::client_config(config))?;
        Ok(Arc::new(AddressValidator::new(Arc::new(client))))
    }

    fn validate_config(&self, config: &JsonValue) -> Result<(), ConfigError> {
        if config["api_key"].as_str().is_none() && std::env::var(API_KEY_ENV).is_err() {
            return Err(ConfigError::MissingCredential { env_var: API_KEY_ENV });
        }

        if let Some(url) = config["base_url"].as_str() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidBaseUrl(url.to_string()));
            }
        }

        Ok(())
    }

    fn description(&self) -> &'static str {
        "Validates an address against the Google Address Validation API"
    }
}
