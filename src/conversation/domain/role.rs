//! Message source roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The producer of a message in the log.
///
/// # Examples
///
/// ```
/// use switchyard::conversation::domain::Role;
///
/// let role: Role = "agent_result".parse().expect("known role");
/// assert_eq!(role, Role::AgentResult);
/// assert!(role.is_substantive());
/// assert!(!Role::Control.is_substantive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The person who submitted the request.
    Human,
    /// A routing decision emitted by the supervisor.
    Control,
    /// The output of a worker agent.
    AgentResult,
}

impl Role {
    /// Returns the canonical string form of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Control => "control",
            Self::AgentResult => "agent_result",
        }
    }

    /// Returns `true` for roles that carry conversational content.
    ///
    /// Control messages only carry routing tokens and are skipped when a
    /// worker looks for its task.
    #[must_use]
    pub const fn is_substantive(self) -> bool {
        matches!(self, Self::Human | Self::AgentResult)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "human" => Ok(Self::Human),
            "control" => Ok(Self::Control),
            "agent_result" => Ok(Self::AgentResult),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}
