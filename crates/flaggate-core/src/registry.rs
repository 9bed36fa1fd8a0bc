//! Stage Registry: the fixed, ordered dispatch table
//!
//! Built once, then read-only. The order stages are added in is the order
//! the engine runs them in; there is no way to reorder or remove a stage
//! from a built registry.
use crate::data_model::Candidate;
use crate::stage::{FnStage, Stage};

/// Ordered, read-only list of stages
pub struct StageRegistry {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl StageRegistry {
    /// Freeze `stages` in the given order
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Start an empty builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Stage ids joined in execution order (ex: "length→format→hash")
    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    /// Iterate stages in execution order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Stage> {
        self.stages.iter().map(|s| s.as_ref())
    }

    /// Display names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if no stage is registered
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for StageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("StageRegistry")
            .field("pipeline_id", &self.pipeline_id)
            .field("stages", &self.names())
            .finish()
    }
}

/// Collects stages in order before freezing them into a [`StageRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    stages: Vec<Box<dyn Stage>>,
}

impl RegistryBuilder {
    /// Append a stage
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append an already boxed stage
    pub fn boxed(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append a closure as a stage
    pub fn check<F>(self, id: impl Into<String>, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Candidate<'_>) -> bool + Send + Sync + 'static,
    {
        self.stage(FnStage::new(id, name, check))
    }

    /// Freeze the collected stages into a registry
    pub fn build(self) -> StageRegistry {
        StageRegistry::new(self.stages)
    }
}
