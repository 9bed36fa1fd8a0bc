//! Data Model: Candidate, StageResult, Verdict
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single input under validation.
///
/// Borrowed for the duration of one call. Length is always measured from
/// the underlying bytes, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    raw: &'a [u8],
}

impl<'a> Candidate<'a> {
    /// Create a candidate from text
    pub fn new(text: &'a str) -> Self {
        Self { raw: text.as_bytes() }
    }

    /// Candidates are not required to be UTF-8 or NUL-free.
    pub fn from_bytes(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the candidate has no bytes
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Check if the candidate begins with `prefix`
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.raw.starts_with(prefix)
    }

    /// Check if the candidate ends with `suffix`
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.raw.ends_with(suffix)
    }

    /// Bytes left after dropping `head` bytes from the front and `tail`
    /// bytes from the back. `None` when the two ranges overlap.
    pub fn between(&self, head: usize, tail: usize) -> Option<&'a [u8]> {
        let end = self.raw.len().checked_sub(tail)?;
        self.raw.get(head..end)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a [u8]> for Candidate<'a> {
    fn from(raw: &'a [u8]) -> Self {
        Self::from_bytes(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageOutcome {
    Passed,
    Failed,
}

impl StageOutcome {
    /// Map a stage answer to an outcome
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            StageOutcome::Passed
        } else {
            StageOutcome::Failed
        }
    }

    /// Check if the stage passed
    pub fn is_passed(&self) -> bool {
        matches!(self, StageOutcome::Passed)
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StageOutcome::Passed => write!(f, "PASSED"),
            StageOutcome::Failed => write!(f, "FAILED"),
        }
    }
}

/// Outcome of one stage within one validation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    /// 1-based position in the registry
    pub ordinal: usize,
    /// Stable stage id (ex: "hash")
    pub id: String,
    /// Display name (ex: "hash check")
    pub name: String,
    pub outcome: StageOutcome,
}

impl StageResult {
    /// Check if this stage passed
    pub fn passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

impl fmt::Display for StageResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stage {} ({}): {}", self.ordinal, self.name, self.outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Accept,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::Accept => write!(f, "ACCEPT"),
            Decision::Reject => write!(f, "REJECT"),
        }
    }
}

/// Final answer of the engine plus the trace that led to it.
///
/// `results` holds every evaluated stage in registry order and ends at the
/// first failure, so a rejected verdict always has a failed last entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub decision: Decision,
    pub results: Vec<StageResult>,
}

impl Verdict {
    /// Check if every stage passed
    pub fn is_accepted(&self) -> bool {
        self.decision == Decision::Accept
    }

    /// Check if some stage failed
    pub fn is_rejected(&self) -> bool {
        self.decision == Decision::Reject
    }

    /// The stage that stopped the pipeline, if any
    pub fn failed_stage(&self) -> Option<&StageResult> {
        self.results.iter().find(|r| !r.passed())
    }

    /// Number of stages that ran
    pub fn stages_evaluated(&self) -> usize {
        self.results.len()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.decision)?;
        if let Some(failed) = self.failed_stage() {
            write!(f, " (stage {}: {})", failed.ordinal, failed.name)?;
        }
        Ok(())
    }
}
