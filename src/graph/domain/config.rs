//! Graph wiring configuration.

use serde::{Deserialize, Serialize};

/// Default number of node executions allowed per run.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Where control goes after a worker has appended its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnPolicy {
    /// Hand control back to the supervisor for another decision.
    #[default]
    ToSupervisor,
    /// End the run after a single worker turn.
    End,
}

/// Wiring and safety limits for an orchestration graph.
///
/// # Examples
///
/// ```
/// use switchyard::graph::domain::{GraphConfig, ReturnPolicy};
///
/// let config: GraphConfig = serde_json::from_str(r#"{ "return_policy": "end" }"#)
///     .expect("valid config");
/// assert_eq!(config.return_policy, ReturnPolicy::End);
/// assert_eq!(config.max_steps, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Where control goes after a worker turn.
    pub return_policy: ReturnPolicy,
    /// Maximum number of node executions (supervisor and worker steps)
    /// per run. `None` disables the budget.
    pub max_steps: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            return_policy: ReturnPolicy::ToSupervisor,
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl GraphConfig {
    /// Creates a configuration that ends the run after one worker turn.
    #[must_use]
    pub fn single_turn() -> Self {
        Self {
            return_policy: ReturnPolicy::End,
            ..Self::default()
        }
    }

    /// Creates a configuration without a step budget.
    ///
    /// Termination then relies solely on the supervisor's `FINISH`
    /// fallback.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_steps: None,
            ..Self::default()
        }
    }

    /// Sets the step budget.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Sets the return policy.
    #[must_use]
    pub const fn with_return_policy(mut self, return_policy: ReturnPolicy) -> Self {
        self.return_policy = return_policy;
        self
    }
}
