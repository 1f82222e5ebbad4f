//! Validator surface: the seam the guard framework calls.
//!
//! [`AddressValidator`] wires a verifier to the core classifier: trim the
//! value, verify once, classify. The verifier sits behind a trait so tests
//! drive the validator without a network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use addrgate_core::{classify, ValidationOutcome, VerificationResult};

use crate::ServiceError;

/// Performs the remote verification call.
///
/// The input address is assumed pre-trimmed of leading/trailing whitespace.
#[async_trait]
pub trait AddressVerifier: Send + Sync {
    /// Verify one address. One outbound call, no internal retries.
    async fn verify(&self, address: &str) -> Result<VerificationResult, ServiceError>;

    /// Verifier name for logging.
    fn name(&self) -> &str;
}

/// A validation step usable by a structured-output guard framework.
///
/// How a failure is handled — raise, filter, or apply the suggested fix —
/// is the framework's decision, not the validator's.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Validate one candidate value.
    async fn validate(
        &self,
        value: &str,
        metadata: &HashMap<String, String>,
    ) -> Result<ValidationOutcome, ServiceError>;

    /// The name this validator registers under.
    fn name(&self) -> &str;
}

/// Address validator: verify remotely, classify deterministically.
///
/// Stateless between calls; the verifier handle is immutable after
/// construction and safe to share across tasks.
pub struct AddressValidator {
    verifier: Arc<dyn AddressVerifier>,
}

impl AddressValidator {
    /// Registry name for this validator.
    pub const NAME: &'static str = "valid-address";

    pub fn new(verifier: Arc<dyn AddressVerifier>) -> Self {
        Self { verifier }
    }
}

impl std::fmt::Debug for AddressValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressValidator")
            .field("verifier", &self.verifier.name())
            .finish()
    }
}

#[async_trait]
impl Validator for AddressValidator {
    async fn validate(
        &self,
        value: &str,
        _metadata: &HashMap<String, String>,
    ) -> Result<ValidationOutcome, ServiceError> {
        let address = value.trim();
        debug!(verifier = self.verifier.name(), address, "validating address");

        let result = self.verifier.verify(address).await?;
        Ok(classify(address, &result))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
