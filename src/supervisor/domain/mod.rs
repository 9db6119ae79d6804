//! Domain model for supervisor decisions.

mod decision;
mod prompt;

pub use decision::{Decision, FallbackReason};
pub use prompt::{DEFAULT_TEMPLATE, PromptRenderError, SupervisorPrompt, build_request};
