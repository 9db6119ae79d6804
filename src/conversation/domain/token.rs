//! Worker names, routing tokens, and the vocabulary of legal tokens.

use crate::conversation::error::{ConversationError, ConversationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved routing token that terminates a run.
pub const FINISH: &str = "FINISH";

/// Maximum length for a worker name.
const MAX_NAME_LENGTH: usize = 64;

/// Validated worker identifier, also used verbatim as a routing token.
///
/// Names are case-sensitive and must be a single bare token so that the
/// supervisor can emit them as its entire output.
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::WorkerName;
///
/// let name = WorkerName::new(" Music ").expect("valid name");
/// assert_eq!(name.as_str(), "Music");
/// assert!(WorkerName::new("FINISH").is_err());
/// assert!(WorkerName::new("web browser").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkerName(String);

impl WorkerName {
    /// Creates a validated worker name.
    ///
    /// Surrounding whitespace is trimmed. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::EmptyWorkerName`] when the value is empty
    /// after trimming, [`ConversationError::InvalidWorkerName`] when it
    /// contains inner whitespace, [`ConversationError::WorkerNameTooLong`]
    /// when it exceeds 64 characters, or
    /// [`ConversationError::ReservedWorkerName`] when it equals `FINISH`.
    pub fn new(value: impl Into<String>) -> ConversationResult<Self> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ConversationError::EmptyWorkerName);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ConversationError::WorkerNameTooLong(raw));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConversationError::InvalidWorkerName(raw));
        }
        if trimmed == FINISH {
            return Err(ConversationError::ReservedWorkerName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the worker name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WorkerName {
    type Error = ConversationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkerName> for String {
    fn from(name: WorkerName) -> Self {
        name.0
    }
}

/// A routing decision: either hand control to a worker or finish the run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "worker")]
pub enum RoutingToken {
    /// Dispatch to the named worker.
    Worker(WorkerName),
    /// Terminate the run.
    Finish,
}

impl RoutingToken {
    /// Returns the token exactly as the supervisor emits it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Worker(name) => name.as_str(),
            Self::Finish => FINISH,
        }
    }

    /// Returns `true` for the termination token.
    #[must_use]
    pub const fn is_finish(&self) -> bool {
        matches!(self, Self::Finish)
    }

    /// Returns the worker name when this token dispatches to a worker.
    #[must_use]
    pub const fn worker(&self) -> Option<&WorkerName> {
        match self {
            Self::Worker(name) => Some(name),
            Self::Finish => None,
        }
    }
}

impl fmt::Display for RoutingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of legal routing tokens for one conversation.
///
/// Holds the registered worker names in registration order; `FINISH` is
/// always legal and always listed last.
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::{RoutingToken, RoutingVocabulary, WorkerName};
///
/// let vocabulary = RoutingVocabulary::new([
///     WorkerName::new("Browser").expect("valid name"),
///     WorkerName::new("Music").expect("valid name"),
/// ]);
///
/// assert_eq!(vocabulary.tokens().collect::<Vec<_>>(), ["Browser", "Music", "FINISH"]);
/// assert_eq!(vocabulary.resolve("FINISH"), Some(RoutingToken::Finish));
/// assert_eq!(vocabulary.resolve("BrowserX"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingVocabulary {
    workers: Vec<WorkerName>,
}

impl RoutingVocabulary {
    /// Creates a vocabulary from worker names, ignoring repeated names.
    #[must_use]
    pub fn new(workers: impl IntoIterator<Item = WorkerName>) -> Self {
        let mut unique: Vec<WorkerName> = Vec::new();
        for name in workers {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { workers: unique }
    }

    /// Returns the worker names in registration order.
    #[must_use]
    pub fn workers(&self) -> &[WorkerName] {
        &self.workers
    }

    /// Iterates over every legal token, workers first and `FINISH` last.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.workers
            .iter()
            .map(WorkerName::as_str)
            .chain(std::iter::once(FINISH))
    }

    /// Resolves a raw string to a legal token by exact comparison.
    ///
    /// No trimming or case folding is applied.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<RoutingToken> {
        if raw == FINISH {
            return Some(RoutingToken::Finish);
        }
        self.workers
            .iter()
            .find(|name| name.as_str() == raw)
            .map(|name| RoutingToken::Worker(name.clone()))
    }

    /// Returns `true` when the token is legal in this vocabulary.
    #[must_use]
    pub fn contains(&self, token: &RoutingToken) -> bool {
        match token {
            RoutingToken::Finish => true,
            RoutingToken::Worker(name) => self.workers.contains(name),
        }
    }
}
