//! Error types for worker domain validation.

use crate::conversation::{domain::WorkerName, error::ConversationError};
use thiserror::Error;

/// Errors returned while constructing worker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkerDomainError {
    /// The worker name is not a valid routing token.
    #[error(transparent)]
    Name(#[from] ConversationError),

    /// The worker description is empty after trimming.
    #[error("worker '{0}' must have a description")]
    EmptyDescription(WorkerName),
}
