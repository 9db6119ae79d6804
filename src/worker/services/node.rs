//! Worker agent node: runs one reasoning loop against the message log.

use crate::conversation::{
    domain::{MessageBody, MessageLog, SequenceNumber, WorkerName},
    error::ConversationError,
};
use crate::worker::{
    domain::WorkerProfile,
    ports::{ReasoningError, ReasoningLoop, Toolset},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a worker step.
///
/// Reasoning failures are not errors at this level: they are recorded in
/// the log as the worker's answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkerError {
    /// The log holds no human or agent-result message to use as the task.
    #[error("worker '{0}' found no substantive message to work on")]
    MissingContext(WorkerName),

    /// The worker's result could not be appended to the log.
    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

/// Result type for worker steps.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// How the reasoning loop concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerStatus {
    /// The loop returned a final answer.
    Answered,
    /// The loop failed; the failure description was logged as the answer.
    Failed(ReasoningError),
}

/// Summary of one completed worker step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    /// The worker that ran.
    pub worker: WorkerName,
    /// Sequence number of the appended agent-result message.
    pub sequence: SequenceNumber,
    /// How the reasoning loop concluded.
    pub status: WorkerStatus,
}

impl WorkerOutcome {
    /// Returns `true` when the reasoning loop failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.status, WorkerStatus::Failed(_))
    }
}

/// A specialised worker bound to a reasoning loop and a toolset.
///
/// Each step reads the most recent substantive message, hands its content
/// to the reasoning loop as the task, and appends exactly one agent-result
/// message.
#[derive(Clone)]
pub struct WorkerNode {
    profile: WorkerProfile,
    reasoning: Arc<dyn ReasoningLoop>,
    toolset: Toolset,
}

impl WorkerNode {
    /// Creates a worker node.
    #[must_use]
    pub fn new(profile: WorkerProfile, reasoning: Arc<dyn ReasoningLoop>, toolset: Toolset) -> Self {
        Self {
            profile,
            reasoning,
            toolset,
        }
    }

    /// Returns the worker profile.
    #[must_use]
    pub const fn profile(&self) -> &WorkerProfile {
        &self.profile
    }

    /// Returns the worker name.
    #[must_use]
    pub const fn name(&self) -> &WorkerName {
        self.profile.name()
    }

    /// Returns the bound toolset.
    #[must_use]
    pub const fn toolset(&self) -> &Toolset {
        &self.toolset
    }

    /// Runs one worker step and appends the result to `log`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::MissingContext`] when the log holds no
    /// substantive message. Reasoning failures do not produce errors; they
    /// are appended as a failure description and reported through
    /// [`WorkerStatus::Failed`].
    pub async fn execute(
        &self,
        log: &mut MessageLog,
        clock: &(impl Clock + Sync),
    ) -> WorkerResult<WorkerOutcome> {
        let task = log
            .latest_substantive()
            .map_err(|_| WorkerError::MissingContext(self.name().clone()))?
            .content();

        tracing::info!(worker = %self.name(), tools = self.toolset.len(), "executing worker");

        let (text, status) = match self.reasoning.run(&task, &self.toolset).await {
            Ok(output) => (output, WorkerStatus::Answered),
            Err(error) => {
                tracing::warn!(worker = %self.name(), %error, "reasoning loop failed");
                (failure_description(&error), WorkerStatus::Failed(error))
            }
        };

        let body = MessageBody::attributed_result(
            self.name().clone(),
            self.profile.display_name(),
            text,
        );
        let sequence = log.append(body, clock)?;

        Ok(WorkerOutcome {
            worker: self.name().clone(),
            sequence,
            status,
        })
    }
}

impl fmt::Debug for WorkerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerNode")
            .field("profile", &self.profile)
            .field("toolset", &self.toolset)
            .finish_non_exhaustive()
    }
}

fn failure_description(error: &ReasoningError) -> String {
    format!("I could not complete the task because an error occurred: {error}")
}
