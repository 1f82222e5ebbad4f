//! Outcome classifier: maps a verification result onto a validation outcome.
//!
//! The classifier applies strict, non-configurable rules in order of
//! decreasing severity:
//! 1. Any unconfirmed component → FAIL with no fix value
//! 2. Any important (non-ignored) component inferred → FAIL with fix value
//! 3. Any component spell-corrected → FAIL with fix value
//! 4. Otherwise → PASS
//!
//! First matching rule wins. The checks are increasingly lenient, so the
//! order is load-bearing: an unconfirmed address may be fundamentally
//! unverifiable, which is why rule 1 offers no fix even when the service
//! returned a formatted address.

use tracing::debug;

use crate::types::{ValidationOutcome, VerificationResult};

/// Component categories whose inferred status does not by itself cause
/// rejection. The service inferring a country or postal code is
/// low-information and not worth rejecting over.
pub const IGNORED_COMPONENT_TYPES: [&str; 3] = ["postal_code", "postal_code_suffix", "country"];

/// Classify a verification result for the given original address.
///
/// Pure and deterministic: no I/O, no state carried between calls. The fix
/// value, when offered, is always the service's `formatted_address`.
pub fn classify(address: &str, result: &VerificationResult) -> ValidationOutcome {
    // Rule 1: unconfirmed components. The service could not confidently
    // interpret enough of the address to offer a reliable correction.
    if result.has_unconfirmed_components {
        debug!(address, "address has unconfirmed components");
        return ValidationOutcome::fail(format!(
            "Address '{address}' has unconfirmed and unverified components"
        ));
    }

    // Rule 2: important components inferred. Inference means the input
    // under-specified the address, which is worse than a mere typo.
    let important_inferred = result.components.iter().any(|component| {
        component.inferred && !IGNORED_COMPONENT_TYPES.contains(&component.component_type.as_str())
    });
    if important_inferred {
        debug!(
            address,
            fix = %result.formatted_address,
            "address has important components inferred"
        );
        return ValidationOutcome::fail_with_fix(
            format!("Address '{address}' has important components inferred"),
            result.formatted_address.clone(),
        );
    }

    // Rule 3: spelling corrections. The input was substantially correct,
    // so the formatted address is a safe replacement.
    if result.components.iter().any(|c| c.spell_corrected) {
        debug!(
            address,
            fix = %result.formatted_address,
            "address has spell-corrected components"
        );
        return ValidationOutcome::fail_with_fix(
            format!("Address '{address}' has some typos"),
            result.formatted_address.clone(),
        );
    }

    // Rule 4: nothing flagged.
    debug!(address, "address verified clean");
    ValidationOutcome::Pass
}
