//! Errors surfaced by orchestration runs.

use crate::conversation::{domain::WorkerName, error::ConversationError};
use crate::supervisor::{domain::PromptRenderError, services::SupervisorError};
use crate::worker::services::{RegistryError, WorkerError};
use thiserror::Error;

/// Errors that abort building an orchestrator or driving a run.
///
/// Supervisor ambiguity and worker reasoning failures never appear here:
/// the former resolves to `FINISH` and the latter is recorded in the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestrationError {
    /// A worker was dispatched but the log held no task for it.
    #[error("worker '{0}' was dispatched without a task")]
    MissingContext(WorkerName),

    /// The router selected a worker that is not registered.
    #[error("worker '{0}' is not registered")]
    UnknownWorker(WorkerName),

    /// The log's routing vocabulary does not match the registered workers.
    #[error("log vocabulary [{log}] does not match registered workers [{registered}]")]
    VocabularyMismatch {
        /// Tokens legal in the supplied log.
        log: String,
        /// Tokens legal for the orchestrator.
        registered: String,
    },

    /// The worker registry could not be built.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The supervisor prompt could not be rendered.
    #[error(transparent)]
    Prompt(#[from] PromptRenderError),

    /// The message log rejected an append.
    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

impl From<WorkerError> for OrchestrationError {
    fn from(error: WorkerError) -> Self {
        match error {
            WorkerError::MissingContext(name) => Self::MissingContext(name),
            WorkerError::Conversation(inner) => Self::Conversation(inner),
        }
    }
}

impl From<SupervisorError> for OrchestrationError {
    fn from(error: SupervisorError) -> Self {
        match error {
            SupervisorError::Prompt(inner) => Self::Prompt(inner),
            SupervisorError::Conversation(inner) => Self::Conversation(inner),
        }
    }
}

/// Result type for orchestration operations.
pub type OrchestrationResult<T> = Result<T, OrchestrationError>;
