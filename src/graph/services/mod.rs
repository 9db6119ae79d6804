//! Graph execution services.

mod builder;
mod orchestrator;

pub use builder::OrchestratorBuilder;
pub use orchestrator::Orchestrator;
