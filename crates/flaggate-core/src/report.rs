//! Validation Report: audit envelope around a Verdict
//!
//! The Verdict is deterministic; everything run-specific (trace id, clock)
//! lives here instead so it never leaks into the decision itself.
use crate::data_model::{Candidate, Verdict};
use crate::error::GateError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub trace_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub engine: String,
    /// Gate profile the stages were built from (ex: "reagent@1.0")
    pub profile: String,
    pub pipeline_id: String,
    /// `blake3:<hex>` of the candidate bytes
    pub candidate_hash: String,
    pub candidate_len: usize,
    pub verdict: Verdict,
}

impl ValidationReport {
    /// Wrap a verdict with run metadata and the candidate's hash
    pub fn new(
        candidate: &Candidate<'_>,
        profile: impl Into<String>,
        pipeline_id: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            evaluated_at: Utc::now(),
            engine: format!("flaggate/{}", crate::FLAGGATE_VERSION),
            profile: profile.into(),
            pipeline_id: pipeline_id.into(),
            candidate_hash: hash_bytes(candidate.as_bytes()),
            candidate_len: candidate.len(),
            verdict,
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, GateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn hash_bytes(data: &[u8]) -> String {
    format!("blake3:{}", blake3::hash(data))
}
