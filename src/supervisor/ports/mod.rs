//! Port contracts for the supervisor.

pub mod completion;

pub use completion::{
    ChatMessage, ChatRole, CompletionError, CompletionRequest, CompletionResult,
    CompletionService,
};
