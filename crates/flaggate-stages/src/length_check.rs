use flaggate_core::{Candidate, Stage};

use crate::profile::GateProfile;

/// Passes iff the candidate is exactly `expected` bytes long.
#[derive(Debug, Clone)]
pub struct LengthCheckStage {
    expected: usize,
}

impl LengthCheckStage {
    /// Create the stage from explicit parameters
    pub fn new(expected: usize) -> Self {
        Self { expected }
    }

    /// Create the stage from a gate profile
    pub fn from_profile(profile: &GateProfile) -> Self {
        Self::new(profile.target_len)
    }
}

impl Stage for LengthCheckStage {
    fn id(&self) -> &str {
        "length"
    }

    fn name(&self) -> &str {
        "length check"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> bool {
        candidate.len() == self.expected
    }
}
