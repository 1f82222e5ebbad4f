//! # addrgate-core
//!
//! Deterministic outcome classification for address validation.
//!
//! This crate holds the data model and the decision logic that maps a
//! verification-service response onto a validation outcome. It performs no
//! I/O: the network call lives in `addrgate-runtime`, and anything that
//! reaches [`classify`] is already a well-formed [`VerificationResult`].
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces the same outcome
//! 2. **Pure**: no network, no environment, no state between calls
//! 3. **Total**: classification never errors; malformed responses are
//!    rejected upstream at the client boundary
//!
//! ## Example
//!
//! ```rust
//! use addrgate_core::{classify, AddressComponent, ValidationOutcome, VerificationResult};
//!
//! let result = VerificationResult {
//!     components: vec![AddressComponent::confirmed("route")],
//!     has_unconfirmed_components: false,
//!     formatted_address: "1 Hacker Way, Menlo Park, CA 94025, USA".to_string(),
//! };
//!
//! assert_eq!(
//!     classify("1 Hacker Way, Menlo Park, CA", &result),
//!     ValidationOutcome::Pass
//! );
//! ```

pub mod classifier;
pub mod types;

// Re-export main types at crate root
pub use classifier::{classify, IGNORED_COMPONENT_TYPES};
pub use types::{AddressComponent, ConfirmationLevel, ValidationOutcome, VerificationResult};
