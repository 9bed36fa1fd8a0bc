//! Flaggate Stages: the four checks a candidate flag has to clear.
//!
//! # Pipeline Flow
//!
//! ```text
//! Candidate → length → format → hash → arithmetic → ACCEPT
//!               ↓        ↓        ↓        ↓
//!            23 bytes  reagent{ FNV-1a   Σ bytes
//!                      ... }   of inner  mod 256
//! ```
//!
//! Every stage is built from a [`GateProfile`]. The `reagent` profile is the
//! default and is what [`validate`] runs against.
//!
//! # Example
//!
//! ```
//! use flaggate_stages::validate;
//!
//! let verdict = validate("reagent{m4th_plus_h4sh}");
//! assert!(verdict.is_accepted());
//! assert_eq!(verdict.results.len(), 4);
//!
//! let verdict = validate("short");
//! assert!(verdict.is_rejected());
//! assert_eq!(verdict.results.len(), 1);
//! ```

mod arithmetic_check;
pub mod digest;
mod format_check;
mod hash_check;
mod length_check;
pub mod profile;
pub mod span;

pub use arithmetic_check::ArithmeticCheckStage;
pub use digest::{byte_sum_mod256, fnv1a32};
pub use format_check::FormatCheckStage;
pub use hash_check::HashCheckStage;
pub use length_check::LengthCheckStage;
pub use profile::GateProfile;
pub use span::InnerSpan;

use flaggate_core::{Candidate, GateError, StageRegistry, ValidationEngine, Verdict};
use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<ValidationEngine> =
    Lazy::new(|| ValidationEngine::new(registry_for(&GateProfile::reagent())));

/// Build the registry `length → format → hash → arithmetic` for a profile.
///
/// The profile is trusted as-is; use [`engine_for`] to have it validated.
pub fn registry_for(profile: &GateProfile) -> StageRegistry {
    StageRegistry::builder()
        .stage(LengthCheckStage::from_profile(profile))
        .stage(FormatCheckStage::from_profile(profile))
        .stage(HashCheckStage::from_profile(profile))
        .stage(ArithmeticCheckStage::from_profile(profile))
        .build()
}

/// Validate the profile and build an engine for it.
pub fn engine_for(profile: &GateProfile) -> Result<ValidationEngine, GateError> {
    profile.validate()?;
    Ok(ValidationEngine::new(registry_for(profile)))
}

/// The engine for the `reagent` profile, built on first use.
pub fn default_engine() -> &'static ValidationEngine {
    &DEFAULT_ENGINE
}

/// Validate against the `reagent` profile.
pub fn validate<'a>(candidate: impl Into<Candidate<'a>>) -> Verdict {
    DEFAULT_ENGINE.validate(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let registry = registry_for(&GateProfile::reagent());
        assert_eq!(registry.pipeline_id(), "length→format→hash→arithmetic");
        assert_eq!(
            registry.names(),
            vec!["length check", "format check", "hash check", "arithmetic check"]
        );
    }

    #[test]
    fn test_engine_for_rejects_invalid_profile() {
        let mut profile = GateProfile::reagent();
        profile.suffix.clear();
        assert!(engine_for(&profile).is_err());
    }

    #[test]
    fn test_custom_profile_engine() {
        let profile = GateProfile {
            name: "tiny@1.0".to_string(),
            target_len: 4,
            prefix: "k{".to_string(),
            suffix: "}".to_string(),
            min_len: 4,
            expected_digest: fnv1a32(b"a"),
            expected_checksum: b'a',
        };
        let engine = engine_for(&profile).unwrap();
        assert!(engine.validate("k{a}").is_accepted());

        let verdict = engine.validate("k{b}");
        assert_eq!(verdict.failed_stage().map(|r| r.id.as_str()), Some("hash"));
    }

    #[test]
    fn test_default_engine_is_shared() {
        assert!(std::ptr::eq(default_engine(), default_engine()));
    }
}
