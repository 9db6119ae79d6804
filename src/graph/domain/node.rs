//! Graph states and routing results.

use crate::conversation::domain::WorkerName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A state of the orchestration graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "node", content = "worker")]
pub enum GraphNode {
    /// The supervisor decides the next actor. Initial state.
    Supervisor,
    /// The named worker acts.
    Worker(WorkerName),
    /// The run is over. Terminal state.
    End,
}

impl GraphNode {
    /// Returns `true` for the terminal state.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supervisor => f.write_str("supervisor"),
            Self::Worker(name) => write!(f, "worker:{name}"),
            Self::End => f.write_str("end"),
        }
    }
}

/// The router's verdict after a supervisor step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "route", content = "worker")]
pub enum Route {
    /// Dispatch to the named registered worker.
    Worker(WorkerName),
    /// Terminate the run.
    End,
}

impl From<Route> for GraphNode {
    fn from(route: Route) -> Self {
        match route {
            Route::Worker(name) => Self::Worker(name),
            Route::End => Self::End,
        }
    }
}
