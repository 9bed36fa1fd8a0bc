//! Stage Trait: single contract for every check in the pipeline
use crate::data_model::Candidate;

/// One independent accept/reject check.
///
/// Stages are pure: the same candidate always yields the same answer and
/// nothing is shared between calls.
pub trait Stage: Send + Sync {
    /// Stable short id (ex: "length")
    fn id(&self) -> &str;

    /// Display name used in the per-stage trace (ex: "length check")
    fn name(&self) -> &str;

    /// Whether the candidate satisfies this stage
    fn evaluate(&self, candidate: &Candidate<'_>) -> bool;
}

/// Adapts a plain function or closure into a [`Stage`].
pub struct FnStage<F> {
    id: String,
    name: String,
    check: F,
}

impl<F> FnStage<F>
where
    F: Fn(&Candidate<'_>) -> bool + Send + Sync,
{
    /// Wrap `check` under the given id and display name
    pub fn new(id: impl Into<String>, name: impl Into<String>, check: F) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            check,
        }
    }
}

impl<F> Stage for FnStage<F>
where
    F: Fn(&Candidate<'_>) -> bool + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> bool {
        (self.check)(candidate)
    }
}

impl<F> std::fmt::Debug for FnStage<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FnStage")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
