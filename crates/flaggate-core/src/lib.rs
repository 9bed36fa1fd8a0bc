//! Flaggate Core: Stage trait, registry and validation engine
//!
//! A candidate string is pushed through an ordered list of independent
//! checks. The first failing check ends the run.
//!
//! ```text
//! Candidate → Stage 1 → Stage 2 → ... → Stage N → ACCEPT
//!                ↓          ↓              ↓
//!              REJECT     REJECT         REJECT
//! ```
//!
//! # Example
//!
//! ```
//! use flaggate_core::{StageRegistry, ValidationEngine};
//!
//! let registry = StageRegistry::builder()
//!     .check("length", "length check", |c| c.len() == 5)
//!     .check("format", "format check", |c| c.starts_with(b"ab"))
//!     .build();
//!
//! let engine = ValidationEngine::new(registry);
//! let verdict = engine.validate("abcde");
//! assert!(verdict.is_accepted());
//!
//! let verdict = engine.validate("abc");
//! assert!(verdict.is_rejected());
//! assert_eq!(verdict.results.len(), 1);
//! ```

pub mod data_model;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod stage;

pub use data_model::{Candidate, Decision, StageOutcome, StageResult, Verdict};
pub use error::GateError;
pub use registry::{RegistryBuilder, StageRegistry};
pub use report::ValidationReport;
pub use runner::ValidationEngine;
pub use stage::{FnStage, Stage};

/// Engine version stamped into every report
pub const FLAGGATE_VERSION: &str = env!("CARGO_PKG_VERSION");
