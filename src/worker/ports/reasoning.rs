//! Reasoning-loop port consumed by worker nodes.

use super::tool::Toolset;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for reasoning-loop invocations.
pub type ReasoningResult<T> = Result<T, ReasoningError>;

/// An opaque "reason, call a tool, observe, repeat" loop.
///
/// From the worker's perspective a run is a single awaited call: the task
/// text goes in, the final answer or an unrecoverable error comes out. Any
/// iteration bound is the implementation's own configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReasoningLoop: Send + Sync {
    /// Works on `task` using the tools in `tools` and returns the final
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns [`ReasoningError`] when the loop cannot recover from a parse
    /// failure, a tool failure, or a completion-service failure.
    async fn run(&self, task: &str, tools: &Toolset) -> ReasoningResult<String>;
}

/// Unrecoverable failures of a reasoning loop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReasoningError {
    /// The model output could not be parsed into an action or answer.
    #[error("could not parse model output: {0}")]
    Parsing(String),

    /// A tool call failed in a way the loop could not recover from.
    #[error("tool '{tool}' failed: {reason}")]
    ToolInvocation {
        /// The tool that failed.
        tool: String,
        /// Description of the failure.
        reason: String,
    },

    /// The loop asked for a tool that is not in its toolset.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// The loop hit its own iteration bound without an answer.
    #[error("no final answer after {0} iterations")]
    IterationLimit(usize),

    /// The underlying completion service failed.
    #[error("completion service failed: {0}")]
    Completion(String),
}

impl ReasoningError {
    /// Creates a tool invocation error.
    #[must_use]
    pub fn tool_invocation(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ToolInvocation {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
