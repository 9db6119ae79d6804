//! Adapter implementations of the worker ports.

mod function;
mod scripted;

pub use function::FunctionTool;
pub use scripted::{ScriptedReasoner, ScriptedStep};
