//! Validation Engine: runs the registry in order and stops at the first failure
use crate::data_model::{Candidate, Decision, StageOutcome, StageResult, Verdict};
use crate::registry::StageRegistry;
use tracing::debug;

/// Runs a [`StageRegistry`] against candidates
pub struct ValidationEngine {
    registry: StageRegistry,
}

impl ValidationEngine {
    /// Create an engine over a built registry
    pub fn new(registry: StageRegistry) -> Self {
        Self { registry }
    }

    /// Get the registry this engine runs
    pub fn registry(&self) -> &StageRegistry {
        &self.registry
    }

    /// Stage ids in execution order
    pub fn pipeline_id(&self) -> &str {
        self.registry.pipeline_id()
    }

    /// Run every stage in order, stopping at the first failure
    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> Verdict {
        self.run_with(candidate, |_| {})
    }

    /// Same as [`validate`](Self::validate), handing each stage result to
    /// `on_result` as soon as it is known.
    ///
    /// An empty registry accepts everything.
    pub fn run_with<'a, F>(&self, candidate: impl Into<Candidate<'a>>, mut on_result: F) -> Verdict
    where
        F: FnMut(&StageResult),
    {
        let candidate = candidate.into();
        let mut results = Vec::with_capacity(self.registry.len());

        for (index, stage) in self.registry.iter().enumerate() {
            let outcome = StageOutcome::from_bool(stage.evaluate(&candidate));
            debug!(stage = stage.id(), ordinal = index + 1, %outcome, "stage evaluated");

            let result = StageResult {
                ordinal: index + 1,
                id: stage.id().to_string(),
                name: stage.name().to_string(),
                outcome,
            };
            on_result(&result);
            results.push(result);

            if outcome == StageOutcome::Failed {
                return Verdict {
                    decision: Decision::Reject,
                    results,
                };
            }
        }

        Verdict {
            decision: Decision::Accept,
            results,
        }
    }
}
