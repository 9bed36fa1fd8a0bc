use flaggate_core::{Candidate, Stage};
use tracing::trace;

use crate::digest::fnv1a32;
use crate::profile::GateProfile;
use crate::span::InnerSpan;

/// Passes iff the FNV-1a digest of the inner content equals `expected`.
#[derive(Debug, Clone)]
pub struct HashCheckStage {
    span: InnerSpan,
    expected: u32,
}

impl HashCheckStage {
    /// Create the stage from explicit parameters
    pub fn new(span: InnerSpan, expected: u32) -> Self {
        Self { span, expected }
    }

    /// Create the stage from a gate profile
    pub fn from_profile(profile: &GateProfile) -> Self {
        Self::new(
            InnerSpan::new(profile.prefix.len(), profile.suffix.len(), profile.min_len),
            profile.expected_digest,
        )
    }
}

impl Stage for HashCheckStage {
    fn id(&self) -> &str {
        "hash"
    }

    fn name(&self) -> &str {
        "hash check"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> bool {
        let Some(inner) = self.span.extract(candidate) else {
            return false;
        };
        let digest = fnv1a32(inner);
        trace!(digest = %format!("{:#010x}", digest), "inner digest");
        digest == self.expected
    }
}
