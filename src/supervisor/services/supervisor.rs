//! Supervisor decision service.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::conversation::{
    domain::{MessageBody, MessageLog, SequenceNumber},
    error::ConversationError,
};
use crate::supervisor::{
    domain::{Decision, FallbackReason, PromptRenderError, SupervisorPrompt, build_request},
    ports::CompletionService,
};
use crate::worker::domain::WorkerProfile;

/// Errors raised by the supervisor service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SupervisorError {
    /// The system instruction template could not be rendered.
    #[error(transparent)]
    Prompt(#[from] PromptRenderError),

    /// The decision could not be appended to the log.
    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

/// Result type for supervisor operations.
pub type SupervisorResult<T> = Result<T, SupervisorError>;

/// Summary of one completed supervisor step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorOutcome {
    /// The resolved decision.
    pub decision: Decision,
    /// Sequence number of the appended control message.
    pub sequence: SequenceNumber,
}

/// Chooses the next actor by asking a completion service.
///
/// The supervisor never forwards unvalidated model output: anything other
/// than exactly one legal token becomes `FINISH`.
pub struct Supervisor<C>
where
    C: CompletionService,
{
    completion: Arc<C>,
    system_instruction: String,
}

impl<C> Supervisor<C>
where
    C: CompletionService,
{
    /// Creates a supervisor whose instruction is rendered from `prompt` for
    /// the given workers.
    ///
    /// # Errors
    ///
    /// Returns [`SupervisorError::Prompt`] when the template fails to render.
    pub fn new<'a>(
        completion: Arc<C>,
        prompt: &SupervisorPrompt,
        profiles: impl IntoIterator<Item = &'a WorkerProfile>,
    ) -> SupervisorResult<Self> {
        let system_instruction = prompt.render(profiles)?;
        Ok(Self::with_instruction(completion, system_instruction))
    }

    /// Creates a supervisor with a pre-rendered system instruction.
    #[must_use]
    pub fn with_instruction(completion: Arc<C>, system_instruction: impl Into<String>) -> Self {
        Self {
            completion,
            system_instruction: system_instruction.into(),
        }
    }

    /// Returns the system instruction sent with every request.
    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Asks the completion service for the next actor and validates the
    /// answer against the log's vocabulary.
    ///
    /// Never fails: empty output, unrecognised output, and service errors
    /// all resolve to `FINISH` and are logged as fallback events.
    pub async fn decide(&self, log: &MessageLog) -> Decision {
        let request = build_request(&self.system_instruction, log);
        let decision = match self.completion.complete(&request).await {
            Ok(raw) => {
                tracing::debug!(raw = %raw, "supervisor completion received");
                Decision::resolve(&raw, log.vocabulary())
            }
            Err(error) => Decision::fallback(FallbackReason::CompletionFailed(error.to_string())),
        };

        if let Some(reason) = decision.fallback_reason() {
            tracing::warn!(%reason, "supervisor output rejected, defaulting to FINISH");
        } else {
            tracing::info!(next = %decision.token(), "supervisor decided next step");
        }
        decision
    }

    /// Decides and appends the resolved token to the log as a control
    /// message.
    ///
    /// # Errors
    ///
    /// Returns [`SupervisorError::Conversation`] if the log rejects the
    /// control message.
    pub async fn step(
        &self,
        log: &mut MessageLog,
        clock: &(impl Clock + Sync),
    ) -> SupervisorResult<SupervisorOutcome> {
        let decision = self.decide(log).await;
        let sequence = log.append(MessageBody::control(decision.token().clone()), clock)?;
        Ok(SupervisorOutcome { decision, sequence })
    }
}

impl<C> Clone for Supervisor<C>
where
    C: CompletionService,
{
    fn clone(&self) -> Self {
        Self {
            completion: Arc::clone(&self.completion),
            system_instruction: self.system_instruction.clone(),
        }
    }
}

impl<C> fmt::Debug for Supervisor<C>
where
    C: CompletionService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("system_instruction", &self.system_instruction)
            .finish_non_exhaustive()
    }
}
