use flaggate_core::{Candidate, Stage};

use crate::profile::GateProfile;

/// Passes iff the candidate opens with `prefix` and closes with `suffix`.
///
/// Both sides are checked independently, so a candidate shorter than
/// `prefix.len() + suffix.len()` may still pass when they overlap; the
/// length stage runs first and rules that out for any sane profile.
#[derive(Debug, Clone)]
pub struct FormatCheckStage {
    prefix: Vec<u8>,
    suffix: Vec<u8>,
}

impl FormatCheckStage {
    /// Create the stage from explicit parameters
    pub fn new(prefix: impl Into<Vec<u8>>, suffix: impl Into<Vec<u8>>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Create the stage from a gate profile
    pub fn from_profile(profile: &GateProfile) -> Self {
        Self::new(profile.prefix.as_bytes(), profile.suffix.as_bytes())
    }
}

impl Stage for FormatCheckStage {
    fn id(&self) -> &str {
        "format"
    }

    fn name(&self) -> &str {
        "format check"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> bool {
        candidate.starts_with(&self.prefix) && candidate.ends_with(&self.suffix)
    }
}
