//! Error types for the message log and its domain values.

use super::domain::RoutingToken;
use thiserror::Error;

/// Errors raised while constructing conversation values or appending to a
/// message log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversationError {
    /// The worker name is empty after trimming.
    #[error("worker name must not be empty")]
    EmptyWorkerName,

    /// The worker name contains whitespace, so it cannot be a bare token.
    #[error("worker name '{0}' must be a single bare token without whitespace")]
    InvalidWorkerName(String),

    /// The worker name exceeds the length limit.
    #[error("worker name exceeds 64 character limit: {0}")]
    WorkerNameTooLong(String),

    /// The worker name collides with the reserved termination token.
    #[error("worker name '{0}' is reserved for termination")]
    ReservedWorkerName(String),

    /// A control message carries a token outside the log's vocabulary.
    #[error("routing token '{0}' is not legal for this conversation")]
    IllegalRoutingToken(RoutingToken),

    /// A human or agent-result message has blank text.
    #[error("message text must not be empty")]
    EmptyText,

    /// A stored message's sequence number does not match its position.
    #[error("expected sequence number {expected}, found {found}")]
    OutOfSequence {
        /// The position the message occupies.
        expected: u64,
        /// The sequence number the message carries.
        found: u64,
    },

    /// No human or agent-result message exists in the log.
    #[error("no substantive message found in the conversation")]
    NoSubstantiveMessage,
}

/// Result type for conversation operations.
pub type ConversationResult<T> = Result<T, ConversationError>;
