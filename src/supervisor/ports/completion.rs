//! Completion-service port consumed by the supervisor.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for completion requests.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Speaker of one entry in a chat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Text written by the human.
    User,
    /// Text written by the model side: routing decisions and worker answers.
    Assistant,
}

/// One entry of the chat history sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the text.
    pub role: ChatRole,
    /// The text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a chat message.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A structured prompt: a system instruction followed by ordered history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The system instruction.
    pub system: String,
    /// Chat history, oldest first.
    pub messages: Vec<ChatMessage>,
}

/// A text-completion service with no guarantee on the shape of its output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Completes the prompt and returns the raw model text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] when the service cannot produce a
    /// completion.
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String>;
}

/// Failures reported by completion-service adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// The service could not be reached.
    #[error("completion service unavailable: {0}")]
    Unavailable(String),

    /// The service refused the request.
    #[error("completion request rejected: {0}")]
    Rejected(String),
}
