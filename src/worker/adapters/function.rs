//! Tool adapter backed by a plain function.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::worker::ports::Tool;

type Handler = dyn Fn(Value) -> String + Send + Sync;

/// A [`Tool`] whose behaviour is a synchronous closure.
///
/// Useful for wiring lightweight tools and for exercising reasoning loops
/// without network access.
///
/// # Examples
///
/// ```
/// use switchyard::worker::adapters::FunctionTool;
/// use switchyard::worker::ports::Tool;
///
/// let tool = FunctionTool::new("echo", "Repeats its `text` argument.", |args| {
///     args["text"].as_str().unwrap_or_default().to_owned()
/// });
/// assert_eq!(tool.name(), "echo");
/// ```
#[derive(Clone)]
pub struct FunctionTool {
    name: String,
    description: String,
    handler: Arc<Handler>,
}

impl FunctionTool {
    /// Creates a tool from a name, a description, and a handler.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl Fn(Value) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn invoke(&self, arguments: Value) -> String {
        (self.handler)(arguments)
    }
}

impl fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
