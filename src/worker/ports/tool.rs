//! Tool port and the ordered toolset bound to a worker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A capability a reasoning loop may call while working on a task.
///
/// Tools report failures as human-readable strings rather than errors, so
/// a misbehaving external API never escapes the tool boundary.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique tool name the reasoning loop refers to.
    fn name(&self) -> &str;

    /// Returns a description of what the tool does and its arguments.
    fn description(&self) -> &str;

    /// Invokes the tool with JSON arguments and returns its observation.
    async fn invoke(&self, arguments: Value) -> String;
}

/// Name and description of a tool, as presented to a reasoning loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// The tool name.
    pub name: String,
    /// The tool description.
    pub description: String,
}

/// Ordered collection of tools bound to one worker.
///
/// Lookup is by exact name; when two tools share a name the first one
/// registered wins.
#[derive(Clone, Default)]
pub struct Toolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl Toolset {
    /// Creates an empty toolset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool to the end of the set.
    #[must_use]
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Finds a tool by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Returns descriptors for every tool in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
            })
            .collect()
    }

    /// Returns the tool names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|tool| tool.name())
    }

    /// Returns the number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` when the set holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
