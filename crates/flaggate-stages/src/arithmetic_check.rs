use flaggate_core::{Candidate, Stage};
use tracing::trace;

use crate::digest::byte_sum_mod256;
use crate::profile::GateProfile;
use crate::span::InnerSpan;

/// Passes iff the inner content's byte sum, modulo 256, equals `expected`.
#[derive(Debug, Clone)]
pub struct ArithmeticCheckStage {
    span: InnerSpan,
    expected: u8,
}

impl ArithmeticCheckStage {
    /// Create the stage from explicit parameters
    pub fn new(span: InnerSpan, expected: u8) -> Self {
        Self { span, expected }
    }

    /// Create the stage from a gate profile
    pub fn from_profile(profile: &GateProfile) -> Self {
        Self::new(
            InnerSpan::new(profile.prefix.len(), profile.suffix.len(), profile.min_len),
            profile.expected_checksum,
        )
    }
}

impl Stage for ArithmeticCheckStage {
    fn id(&self) -> &str {
        "arithmetic"
    }

    fn name(&self) -> &str {
        "arithmetic check"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> bool {
        let Some(inner) = self.span.extract(candidate) else {
            return false;
        };
        let checksum = byte_sum_mod256(inner);
        trace!(checksum = %format!("{:#04x}", checksum), "inner checksum");
        checksum == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> ArithmeticCheckStage {
        ArithmeticCheckStage::from_profile(&GateProfile::reagent())
    }

    #[test]
    fn test_reference_inner_sums_to_0x76() {
        assert!(stage().evaluate(&Candidate::new("reagent{m4th_plus_h4sh}")));
    }

    #[test]
    fn test_permutation_keeps_sum() {
        assert!(stage().evaluate(&Candidate::new("reagent{h4th_plus_m4sh}")));
    }

    #[test]
    fn test_changed_byte_breaks_sum() {
        assert!(!stage().evaluate(&Candidate::new("reagent{m4th_plus_h4sX}")));
        assert!(!stage().evaluate(&Candidate::new("reagent{wrong_inner_xy}")));
    }

    #[test]
    fn test_short_candidates_fail() {
        for text in ["", "reagent{", "reagent{}", "123456789"] {
            assert!(!stage().evaluate(&Candidate::new(text)), "{:?}", text);
        }
    }

    #[test]
    fn test_sum_is_reduced_mod_256() {
        // 0xff + 0x77 = 0x176 -> 0x76
        let raw = [b'p', b'p', b'p', b'p', b'p', b'p', b'p', b'p', 0xff, 0x77, b'}'];
        assert!(stage().evaluate(&Candidate::from_bytes(&raw)));
    }
}
