//! The message envelope and its tagged body.
//!
//! Messages are immutable after creation. The body is a tagged variant so
//! routing decisions can never be confused with conversational text.

use super::{MessageId, Role, RoutingToken, SequenceNumber, WorkerName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// What a message says, tagged by who produced it.
///
/// # Serialisation
///
/// Bodies are serialised with a `role` tag field:
///
/// ```json
/// { "role": "human", "text": "play some jazz" }
/// { "role": "control", "token": { "kind": "worker", "worker": "Music" } }
/// { "role": "agent_result", "worker": "Music", "display_name": "Music", "text": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum MessageBody {
    /// A request from the human.
    Human {
        /// The request text.
        text: String,
    },
    /// A routing decision from the supervisor.
    Control {
        /// The resolved routing token.
        token: RoutingToken,
    },
    /// The answer produced by a worker agent.
    AgentResult {
        /// The worker that produced the answer.
        worker: WorkerName,
        /// The name the answer is attributed to in rendered content.
        display_name: String,
        /// The worker's output, or a description of its failure.
        text: String,
    },
}

impl MessageBody {
    /// Creates a human body.
    #[must_use]
    pub fn human(text: impl Into<String>) -> Self {
        Self::Human { text: text.into() }
    }

    /// Creates a control body.
    #[must_use]
    pub const fn control(token: RoutingToken) -> Self {
        Self::Control { token }
    }

    /// Creates an agent-result body attributed to the worker name.
    #[must_use]
    pub fn agent_result(worker: WorkerName, text: impl Into<String>) -> Self {
        let display_name = worker.to_string();
        Self::attributed_result(worker, display_name, text)
    }

    /// Creates an agent-result body attributed to a display name.
    #[must_use]
    pub fn attributed_result(
        worker: WorkerName,
        display_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::AgentResult {
            worker,
            display_name: display_name.into(),
            text: text.into(),
        }
    }

    /// Returns the role of the producer.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Human { .. } => Role::Human,
            Self::Control { .. } => Role::Control,
            Self::AgentResult { .. } => Role::AgentResult,
        }
    }

    /// Renders the body as plain conversational text.
    ///
    /// Agent results disclose the worker's display name so the supervisor
    /// can attribute answers, e.g. `(Music agent): Now playing...`.
    #[must_use]
    pub fn content(&self) -> String {
        match self {
            Self::Human { text } => text.clone(),
            Self::Control { token } => token.as_str().to_owned(),
            Self::AgentResult {
                display_name, text, ..
            } => format!("({display_name} agent): {text}"),
        }
    }
}

/// A message appended to a [`super::MessageLog`].
///
/// # Invariants
///
/// - `sequence_number` equals the message's 1-based position in its log
/// - control bodies only carry tokens legal for the log's vocabulary
/// - messages cannot be modified after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sequence_number: SequenceNumber,
    body: MessageBody,
    created_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(
        sequence_number: SequenceNumber,
        body: MessageBody,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: MessageId::new(),
            sequence_number,
            body,
            created_at: clock.utc(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the position of the message in its log.
    #[must_use]
    pub const fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Returns the tagged body.
    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Returns the role of the producer.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.body.role()
    }

    /// Returns the body rendered as plain text.
    #[must_use]
    pub fn content(&self) -> String {
        self.body.content()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the routing token when this is a control message.
    #[must_use]
    pub const fn routing_token(&self) -> Option<&RoutingToken> {
        match &self.body {
            MessageBody::Control { token } => Some(token),
            MessageBody::Human { .. } | MessageBody::AgentResult { .. } => None,
        }
    }

    /// Returns `true` for human and agent-result messages.
    #[must_use]
    pub const fn is_substantive(&self) -> bool {
        self.role().is_substantive()
    }
}
