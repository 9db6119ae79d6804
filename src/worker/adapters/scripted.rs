//! Scripted reasoning loop for tests and demos.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::worker::ports::{ReasoningError, ReasoningLoop, ReasoningResult, Toolset};

/// One scripted reasoning run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedStep {
    /// Return the text as the final answer.
    Respond(String),
    /// Fail with the given error.
    Fail(ReasoningError),
    /// Call a tool from the bound toolset and return its observation as the
    /// final answer.
    UseTool {
        /// Name of the tool to call.
        tool: String,
        /// Arguments passed to the tool.
        arguments: Value,
    },
}

impl ScriptedStep {
    /// Creates a [`ScriptedStep::Respond`] step.
    #[must_use]
    pub fn respond(text: impl Into<String>) -> Self {
        Self::Respond(text.into())
    }

    /// Creates a [`ScriptedStep::UseTool`] step.
    #[must_use]
    pub fn use_tool(tool: impl Into<String>, arguments: Value) -> Self {
        Self::UseTool {
            tool: tool.into(),
            arguments,
        }
    }
}

/// Thread-safe reasoning loop that replays a fixed script.
///
/// Each run consumes the next scripted step. Once the script is exhausted
/// the fallback step is replayed; without a fallback the run fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReasoner {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    steps: VecDeque<ScriptedStep>,
    fallback: Option<ScriptedStep>,
    tasks: Vec<String>,
}

impl ScriptedReasoner {
    /// Creates a reasoner that replays `steps` in order.
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = ScriptedStep>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScriptState {
                steps: steps.into_iter().collect(),
                ..ScriptState::default()
            })),
        }
    }

    /// Creates a reasoner that answers every task with `text`.
    #[must_use]
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new([]).with_fallback(ScriptedStep::respond(text))
    }

    /// Creates a reasoner that fails every task with `error`.
    #[must_use]
    pub fn failing(error: ReasoningError) -> Self {
        Self::new([]).with_fallback(ScriptedStep::Fail(error))
    }

    /// Sets the step replayed once the script is exhausted.
    #[must_use]
    pub fn with_fallback(self, step: ScriptedStep) -> Self {
        self.lock().fallback = Some(step);
        self
    }

    /// Returns every task received, in order.
    #[must_use]
    pub fn tasks(&self) -> Vec<String> {
        self.lock().tasks.clone()
    }

    /// Returns the number of runs so far.
    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.lock().tasks.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_step(&self, task: &str) -> Option<ScriptedStep> {
        let mut state = self.lock();
        state.tasks.push(task.to_owned());
        state
            .steps
            .pop_front()
            .or_else(|| state.fallback.clone())
    }
}

#[async_trait]
impl ReasoningLoop for ScriptedReasoner {
    async fn run(&self, task: &str, tools: &Toolset) -> ReasoningResult<String> {
        let step = self.next_step(task).ok_or_else(|| {
            ReasoningError::Completion("scripted reasoner has no remaining steps".to_owned())
        })?;

        match step {
            ScriptedStep::Respond(text) => Ok(text),
            ScriptedStep::Fail(error) => Err(error),
            ScriptedStep::UseTool { tool, arguments } => {
                let handle = tools
                    .get(&tool)
                    .ok_or_else(|| ReasoningError::UnknownTool(tool.clone()))?;
                Ok(handle.invoke(arguments).await)
            }
        }
    }
}
