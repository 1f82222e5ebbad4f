//! Data model shared between the verification client and the classifier.

use serde::{Deserialize, Serialize};

/// How confidently the verification service matched one address component
/// against known address data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationLevel {
    /// The service did not report a level for this component.
    #[default]
    ConfirmationLevelUnspecified,
    /// Matched against known address data.
    Confirmed,
    /// Not matched, but plausible.
    UnconfirmedButPlausible,
    /// Not matched and suspicious.
    UnconfirmedAndSuspicious,
}

impl ConfirmationLevel {
    /// Whether the service confirmed this component.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationLevel::Confirmed)
    }
}

/// One structural part of a postal address (street number, route, city, ...)
/// as decomposed by the verification service.
///
/// Read-only to the classifier: components are produced by the service and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Service-assigned category tag, e.g. "street_number", "route",
    /// "locality", "postal_code", "country".
    pub component_type: String,

    /// Match confidence reported by the service.
    #[serde(default)]
    pub confirmation_level: ConfirmationLevel,

    /// The service filled in this component; it was not present in the input.
    #[serde(default)]
    pub inferred: bool,

    /// The service altered the spelling of this component to match known data.
    #[serde(default)]
    pub spell_corrected: bool,
}

impl AddressComponent {
    /// A confirmed component with no inference or correction flags.
    pub fn confirmed(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            confirmation_level: ConfirmationLevel::Confirmed,
            inferred: false,
            spell_corrected: false,
        }
    }
}

/// The structured result of one verification call.
///
/// Owned transiently by a single validation request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Components in the order the service returned them.
    pub components: Vec<AddressComponent>,

    /// The service's overall verdict: at least one component could not be
    /// confirmed against known address data.
    pub has_unconfirmed_components: bool,

    /// The service's canonical rendering of the address. This is the only
    /// value ever offered as a fix.
    pub formatted_address: String,
}

/// The decision returned to the invoking guard framework.
///
/// `on_fail` policy (raise vs. filter vs. apply the fix) is the framework's
/// business, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// The address is acceptable as-is.
    Pass,
    /// The address was rejected.
    Fail {
        /// Human-readable reason referencing the original value.
        error_message: String,
        /// Suggested replacement, always the service's formatted address
        /// when present. Absent when the service could not confidently
        /// interpret enough of the input to offer a reliable correction.
        fix_value: Option<String>,
    },
}

impl ValidationOutcome {
    /// Rejection without a suggested replacement.
    pub fn fail(error_message: impl Into<String>) -> Self {
        ValidationOutcome::Fail {
            error_message: error_message.into(),
            fix_value: None,
        }
    }

    /// Rejection carrying the service's formatted address as the fix.
    pub fn fail_with_fix(error_message: impl Into<String>, fix_value: impl Into<String>) -> Self {
        ValidationOutcome::Fail {
            error_message: error_message.into(),
            fix_value: Some(fix_value.into()),
        }
    }

    /// Whether this outcome is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass)
    }

    /// The suggested replacement value, if any.
    pub fn fix_value(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Pass => None,
            ValidationOutcome::Fail { fix_value, .. } => fix_value.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_level_wire_names() {
        let level: ConfirmationLevel = serde_json::from_str("\"CONFIRMED\"").unwrap();
        assert!(level.is_confirmed());

        let level: ConfirmationLevel =
            serde_json::from_str("\"UNCONFIRMED_BUT_PLAUSIBLE\"").unwrap();
        assert_eq!(level, ConfirmationLevel::UnconfirmedButPlausible);
    }

    #[test]
    fn component_flags_default_false() {
        let component: AddressComponent = serde_json::from_value(serde_json::json!({
            "component_type": "route"
        }))
        .unwrap();

        assert!(!component.inferred);
        assert!(!component.spell_corrected);
        assert_eq!(
            component.confirmation_level,
            ConfirmationLevel::ConfirmationLevelUnspecified
        );
    }

    #[test]
    fn outcome_accessors() {
        assert!(ValidationOutcome::Pass.is_pass());
        assert_eq!(ValidationOutcome::Pass.fix_value(), None);

        let fail = ValidationOutcome::fail("bad address");
        assert!(!fail.is_pass());
        assert_eq!(fail.fix_value(), None);

        let fixed = ValidationOutcome::fail_with_fix("typos", "1600 Amphitheatre Pkwy");
        assert_eq!(fixed.fix_value(), Some("1600 Amphitheatre Pkwy"));
    }
}
