//! Port contracts for worker agents.
//!
//! Ports define the interfaces of the external collaborators a worker node
//! delegates to: the reasoning loop and the tools it may call.

pub mod reasoning;
pub mod tool;

pub use reasoning::{ReasoningError, ReasoningLoop, ReasoningResult};
pub use tool::{Tool, ToolDescriptor, Toolset};
