//! Static description of a worker agent.

use crate::conversation::domain::WorkerName;
use crate::worker::domain::WorkerDomainError;
use serde::{Deserialize, Serialize};

/// Identity and self-description of a worker, fixed at construction.
///
/// The name doubles as the routing token; the display name attributes the
/// worker's answers in the log; the description tells the supervisor what
/// the worker is for.
///
/// # Examples
///
/// ```
/// use switchyard::worker::domain::WorkerProfile;
///
/// let profile = WorkerProfile::new(
///     "Browser",
///     "For tasks that require accessing the internet or searching for information.",
/// )
/// .expect("valid profile");
///
/// assert_eq!(profile.name().as_str(), "Browser");
/// assert_eq!(profile.display_name(), "Browser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerProfile {
    name: WorkerName,
    display_name: String,
    description: String,
}

impl WorkerProfile {
    /// Creates a profile whose display name equals the worker name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerDomainError::Name`] when the name is not a valid
    /// routing token, or [`WorkerDomainError::EmptyDescription`] when the
    /// description is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, WorkerDomainError> {
        let worker_name = WorkerName::new(name)?;
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(WorkerDomainError::EmptyDescription(worker_name));
        }

        Ok(Self {
            display_name: worker_name.to_string(),
            name: worker_name,
            description,
        })
    }

    /// Overrides the display name used to attribute answers.
    ///
    /// A blank display name is ignored.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let trimmed = display_name.trim();
        if !trimmed.is_empty() {
            trimmed.clone_into(&mut self.display_name);
        }
        self
    }

    /// Returns the worker name.
    #[must_use]
    pub const fn name(&self) -> &WorkerName {
        &self.name
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the description shown to the supervisor.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
