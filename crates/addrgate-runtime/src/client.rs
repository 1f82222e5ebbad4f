//! Google Address Validation API client.
//!
//! One outbound POST per [`verify`](AddressVerifier::verify) call; the
//! response is decoded into the core [`VerificationResult`] at this
//! boundary. Anything the decoder cannot make sense of becomes a
//! [`ServiceError`] here — a malformed response never reaches the
//! classifier.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use addrgate_core::{AddressComponent, ConfirmationLevel, VerificationResult};

use crate::credentials::ApiCredential;
use crate::validator::AddressVerifier;
use crate::{ConfigError, ServiceError};

const DEFAULT_BASE_URL: &str = "https://addressvalidation.googleapis.com/v1";
const DEFAULT_REGION_CODE: &str = "US";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction-time configuration for [`GoogleAddressClient`].
///
/// Explicit rather than an implicit global lookup: tests can build a client
/// against a local endpoint without touching the process environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key override. When absent the key is read from
    /// [`GOOGLE_MAPS_API_KEY`](crate::credentials::API_KEY_ENV).
    pub api_key: Option<String>,

    /// CLDR region code constraining verification. Defaults to "US".
    pub region_code: String,

    /// API endpoint prefix, override for testing.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region_code: DEFAULT_REGION_CODE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the Address Validation API.
///
/// Immutable after construction; the underlying reqwest handle is shared
/// and safe for concurrent callers to the extent the transport guarantees.
pub struct GoogleAddressClient {
    credential: ApiCredential,
    region_code: String,
    base_url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GoogleAddressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleAddressClient")
            .field("credential", &self.credential)
            .field("region_code", &self.region_code)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GoogleAddressClient {
    /// Build a client from explicit configuration.
    ///
    /// Fails with [`ConfigError`] when no credential is available — checked
    /// once here, never per call.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(config.base_url));
        }

        let credential = ApiCredential::from_config_or_env(config.api_key.as_deref())?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            credential,
            region_code: config.region_code,
            base_url: config.base_url,
            client,
        })
    }

    /// Build a client entirely from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::default())
    }

    /// The configured region code.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }
}

/// Address Validation API request format.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    address: PostalAddress<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress<'a> {
    region_code: &'a str,
    address_lines: [&'a str; 1],
}

/// Address Validation API response format. Only the fields the classifier
/// consumes are decoded; the service omits false booleans, hence the
/// defaults.
#[derive(Debug, Deserialize)]
struct ValidateResponse {
    result: WireResult,
}

#[derive(Debug, Deserialize)]
struct WireResult {
    verdict: WireVerdict,
    address: WireAddress,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireVerdict {
    #[serde(default)]
    has_unconfirmed_components: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAddress {
    formatted_address: String,
    #[serde(default)]
    address_components: Vec<WireComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireComponent {
    component_type: String,
    #[serde(default)]
    confirmation_level: ConfirmationLevel,
    #[serde(default)]
    inferred: bool,
    #[serde(default)]
    spell_corrected: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl From<ValidateResponse> for VerificationResult {
    fn from(response: ValidateResponse) -> Self {
        let WireResult { verdict, address } = response.result;
        VerificationResult {
            components: address
                .address_components
                .into_iter()
                .map(|c| AddressComponent {
                    component_type: c.component_type,
                    confirmation_level: c.confirmation_level,
                    inferred: c.inferred,
                    spell_corrected: c.spell_corrected,
                })
                .collect(),
            has_unconfirmed_components: verdict.has_unconfirmed_components,
            formatted_address: address.formatted_address,
        }
    }
}

#[async_trait]
impl AddressVerifier for GoogleAddressClient {
    async fn verify(&self, address: &str) -> Result<VerificationResult, ServiceError> {
        let request = ValidateRequest {
            address: PostalAddress {
                region_code: &self.region_code,
                address_lines: [address],
            },
        };

        debug!(region = %self.region_code, "requesting address verification");

        // The credential is exposed only here, as a query parameter the
        // transport never logs.
        let response = self
            .client
            .post(format!("{}:validateAddress", self.base_url))
            .query(&[("key", self.credential.expose())])
            .json(&request)
            .send()
            .await
            .map_err(ServiceError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("{}", status),
            };
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))?;

        Ok(body.into())
    }

    fn name(&self) -> &str {
        "google-address-validation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::API_KEY_ENV;

    fn fixture() -> serde_json::Value {
        serde_json::json!({
            "result": {
                "verdict": {
                    "inputGranularity": "PREMISE",
                    "validationGranularity": "PREMISE",
                    "addressComplete": true
                },
                "address": {
                    "formattedAddress": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                    "addressComponents": [
                        {
                            "componentName": { "text": "1600" },
                            "componentType": "street_number",
                            "confirmationLevel": "CONFIRMED"
                        },
                        {
                            "componentName": { "text": "Amphitheatre Pkwy" },
                            "componentType": "route",
                            "confirmationLevel": "CONFIRMED",
                            "spellCorrected": true
                        },
                        {
                            "componentName": { "text": "94043" },
                            "componentType": "postal_code",
                            "confirmationLevel": "CONFIRMED",
                            "inferred": true
                        }
                    ]
                }
            },
            "responseId": "c62ecb6b-4949-4001-9f37-fd80c4d02f6f"
        })
    }

    #[test]
    fn decodes_realistic_response() {
        let response: ValidateResponse = serde_json::from_value(fixture()).unwrap();
        let result = VerificationResult::from(response);

        // Verdict omitted hasUnconfirmedComponents, so it defaults false.
        assert!(!result.has_unconfirmed_components);
        assert_eq!(result.components.len(), 3);
        assert_eq!(result.components[0].component_type, "street_number");
        assert!(!result.components[0].spell_corrected);
        assert!(result.components[1].spell_corrected);
        assert!(result.components[2].inferred);
        assert_eq!(
            result.formatted_address,
            "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA"
        );
    }

    #[test]
    fn missing_verdict_is_malformed() {
        let body = serde_json::json!({
            "result": {
                "address": { "formattedAddress": "somewhere" }
            }
        });
        assert!(serde_json::from_value::<ValidateResponse>(body).is_err());
    }

    #[test]
    fn missing_address_block_is_malformed() {
        let body = serde_json::json!({
            "result": {
                "verdict": { "hasUnconfirmedComponents": true }
            }
        });
        assert!(serde_json::from_value::<ValidateResponse>(body).is_err());
    }

    #[test]
    fn request_wire_shape() {
        let request = ValidateRequest {
            address: PostalAddress {
                region_code: "US",
                address_lines: ["1 Hacker Way, Menlo Park, CA"],
            },
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "address": {
                    "regionCode": "US",
                    "addressLines": ["1 Hacker Way, Menlo Park, CA"]
                }
            })
        );
    }

    #[test]
    fn config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.region_code, "US");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = GoogleAddressClient::new(ClientConfig {
            api_key: Some("test-key".to_string()),
            base_url: "not-a-url".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn constructs_with_configured_key() {
        let client = GoogleAddressClient::new(ClientConfig {
            api_key: Some("test-key".to_string()),
            ..ClientConfig::default()
        })
        .unwrap();

        assert_eq!(client.name(), "google-address-validation");
        assert_eq!(client.region_code(), "US");
    }

    #[test]
    fn missing_key_fails_construction() {
        if std::env::var(API_KEY_ENV).is_ok() {
            return; // host has a real key configured
        }
        let result = GoogleAddressClient::new(ClientConfig::default());
        assert!(matches!(
            result,
            Err(ConfigError::MissingCredential { .. })
        ));
    }

    #[test]
    fn key_not_in_debug_output() {
        let secret = "maps-super-secret-key";
        let client = GoogleAddressClient::new(ClientConfig {
            api_key: Some(secret.to_string()),
            ..ClientConfig::default()
        })
        .unwrap();

        let debug = format!("{:?}", client);
        assert!(!debug.contains(secret), "API key exposed in Debug output!");
        assert!(debug.contains("[REDACTED]"));
    }
}
