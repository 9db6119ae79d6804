//! The append-only message log shared by one orchestration run.

use super::{Message, MessageBody, RoutingVocabulary, SequenceNumber};
use crate::conversation::error::{ConversationError, ConversationResult};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Ordered, append-only record of a conversation.
///
/// Insertion order is the causal order of the conversation. Entries are
/// never removed or reordered; the only mutation is [`MessageLog::append`].
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::{
///     MessageBody, MessageLog, RoutingToken, RoutingVocabulary, WorkerName,
/// };
/// use mockable::DefaultClock;
///
/// let music = WorkerName::new("Music").expect("valid name");
/// let vocabulary = RoutingVocabulary::new([music.clone()]);
/// let mut log = MessageLog::seeded(vocabulary, "play some jazz", &DefaultClock)
///     .expect("non-empty request");
///
/// log.append(MessageBody::control(RoutingToken::Worker(music)), &DefaultClock)
///     .expect("legal token");
///
/// assert_eq!(log.len(), 2);
/// let task = log.latest_substantive().expect("human message is present");
/// assert_eq!(task.content(), "play some jazz");
/// ```
///
/// Deserialised logs are checked against the same rules as
/// [`MessageLog::append`], and sequence numbers must run from 1 without
/// gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredLog")]
pub struct MessageLog {
    vocabulary: RoutingVocabulary,
    messages: Vec<Message>,
}

impl MessageLog {
    /// Creates an empty log that accepts control tokens from `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: RoutingVocabulary) -> Self {
        Self {
            vocabulary,
            messages: Vec::new(),
        }
    }

    /// Creates a log seeded with one human message.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::EmptyText`] when the request is blank.
    pub fn seeded(
        vocabulary: RoutingVocabulary,
        request: impl Into<String>,
        clock: &impl Clock,
    ) -> ConversationResult<Self> {
        let mut log = Self::new(vocabulary);
        log.append(MessageBody::human(request), clock)?;
        Ok(log)
    }

    /// Appends a message to the end of the log and returns its sequence
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::IllegalRoutingToken`] when a control body
    /// carries a token outside the vocabulary, or
    /// [`ConversationError::EmptyText`] when a human body is blank.
    pub fn append(
        &mut self,
        body: MessageBody,
        clock: &impl Clock,
    ) -> ConversationResult<SequenceNumber> {
        self.check_body(&body)?;
        let sequence = self.next_sequence();
        self.messages.push(Message::new(sequence, body, clock));
        Ok(sequence)
    }

    /// Returns the most recent message, or `None` for an empty log.
    #[must_use]
    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the most recent human or agent-result message.
    ///
    /// Control messages are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::NoSubstantiveMessage`] when the log holds
    /// no human or agent-result message. A log seeded with a human request
    /// never produces this error.
    pub fn latest_substantive(&self) -> ConversationResult<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.is_substantive())
            .ok_or(ConversationError::NoSubstantiveMessage)
    }

    /// Returns the vocabulary of legal routing tokens.
    #[must_use]
    pub const fn vocabulary(&self) -> &RoutingVocabulary {
        &self.vocabulary
    }

    /// Returns all messages in append order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates over messages in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Iterates over agent-result messages in append order.
    pub fn agent_results(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|message| matches!(message.body(), MessageBody::AgentResult { .. }))
    }

    /// Returns the content of the most recent agent result, if any worker
    /// has answered.
    #[must_use]
    pub fn final_answer(&self) -> Option<String> {
        self.agent_results().last().map(Message::content)
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when no message has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn check_body(&self, body: &MessageBody) -> ConversationResult<()> {
        match body {
            MessageBody::Control { token } if !self.vocabulary.contains(token) => {
                Err(ConversationError::IllegalRoutingToken(token.clone()))
            }
            MessageBody::Human { text } if text.trim().is_empty() => {
                Err(ConversationError::EmptyText)
            }
            MessageBody::Control { .. }
            | MessageBody::Human { .. }
            | MessageBody::AgentResult { .. } => Ok(()),
        }
    }

    fn next_sequence(&self) -> SequenceNumber {
        self.messages
            .last()
            .map_or(SequenceNumber::new(1), |message| {
                message.sequence_number().next()
            })
    }
}

/// Unvalidated wire form of a [`MessageLog`].
#[derive(Deserialize)]
struct StoredLog {
    vocabulary: RoutingVocabulary,
    messages: Vec<Message>,
}

impl TryFrom<StoredLog> for MessageLog {
    type Error = ConversationError;

    fn try_from(stored: StoredLog) -> Result<Self, Self::Error> {
        let mut log = Self::new(stored.vocabulary);
        for message in stored.messages {
            let expected = log.next_sequence();
            if message.sequence_number() != expected {
                return Err(ConversationError::OutOfSequence {
                    expected: expected.value(),
                    found: message.sequence_number().value(),
                });
            }
            log.check_body(message.body())?;
            log.messages.push(message);
        }
        Ok(log)
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
