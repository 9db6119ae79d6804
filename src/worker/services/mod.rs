//! Worker node execution and registration services.

mod node;
mod registry;

pub use node::{WorkerError, WorkerNode, WorkerOutcome, WorkerResult, WorkerStatus};
pub use registry::{RegistryError, RegistryResult, WorkerRegistry};
