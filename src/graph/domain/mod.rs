//! Domain model for the orchestration graph.

mod config;
mod node;
mod report;

pub use config::{DEFAULT_MAX_STEPS, GraphConfig, ReturnPolicy};
pub use node::{GraphNode, Route};
pub use report::{NO_ANSWER, RunReport, StepEvent, StepRecord, Termination};
