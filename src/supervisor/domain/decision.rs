//! Validation of raw supervisor output into a routing decision.

use crate::conversation::domain::{RoutingToken, RoutingVocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a raw supervisor output was replaced by `FINISH`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "detail")]
pub enum FallbackReason {
    /// The output was empty after trimming.
    EmptyOutput,
    /// The trimmed output was not exactly one legal token.
    UnrecognisedOutput(String),
    /// The completion service failed.
    CompletionFailed(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOutput => f.write_str("empty output"),
            Self::UnrecognisedOutput(raw) => write!(f, "unrecognised output '{raw}'"),
            Self::CompletionFailed(reason) => write!(f, "completion failed: {reason}"),
        }
    }
}

/// The supervisor's resolved routing decision.
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::{RoutingToken, RoutingVocabulary, WorkerName};
/// use switchyard::supervisor::domain::Decision;
///
/// let vocabulary = RoutingVocabulary::new([WorkerName::new("Music").expect("valid name")]);
///
/// let decision = Decision::resolve("  Music\n", &vocabulary);
/// assert_eq!(decision.token().as_str(), "Music");
/// assert!(!decision.is_fallback());
///
/// let decision = Decision::resolve("browser please", &vocabulary);
/// assert_eq!(decision.token(), &RoutingToken::Finish);
/// assert!(decision.is_fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    token: RoutingToken,
    fallback: Option<FallbackReason>,
}

impl Decision {
    /// Resolves raw model output against the legal vocabulary.
    ///
    /// Surrounding whitespace is stripped; the remainder must equal a legal
    /// token exactly. Anything else resolves to `FINISH`.
    #[must_use]
    pub fn resolve(raw: &str, vocabulary: &RoutingVocabulary) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::fallback(FallbackReason::EmptyOutput);
        }

        vocabulary.resolve(trimmed).map_or_else(
            || Self::fallback(FallbackReason::UnrecognisedOutput(trimmed.to_owned())),
            Self::accepted,
        )
    }

    /// Creates a decision for a valid token.
    #[must_use]
    pub const fn accepted(token: RoutingToken) -> Self {
        Self {
            token,
            fallback: None,
        }
    }

    /// Creates a `FINISH` decision forced by `reason`.
    #[must_use]
    pub const fn fallback(reason: FallbackReason) -> Self {
        Self {
            token: RoutingToken::Finish,
            fallback: Some(reason),
        }
    }

    /// Returns the resolved token.
    #[must_use]
    pub const fn token(&self) -> &RoutingToken {
        &self.token
    }

    /// Returns the fallback reason when the raw output was rejected.
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        self.fallback.as_ref()
    }

    /// Returns `true` when the raw output was replaced by `FINISH`.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Consumes the decision and returns its token.
    #[must_use]
    pub fn into_token(self) -> RoutingToken {
        self.token
    }
}
