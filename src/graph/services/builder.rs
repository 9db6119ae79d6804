//! Assembly of an [`Orchestrator`] from its collaborators.

use std::sync::Arc;

use mockable::Clock;

use super::Orchestrator;
use crate::graph::{domain::GraphConfig, error::OrchestrationResult};
use crate::supervisor::{domain::SupervisorPrompt, ports::CompletionService, services::Supervisor};
use crate::worker::services::{WorkerNode, WorkerRegistry};

/// Collects workers and configuration before building an orchestrator.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use switchyard::graph::services::OrchestratorBuilder;
/// use switchyard::supervisor::adapters::ScriptedCompletion;
/// use switchyard::worker::{
///     adapters::ScriptedReasoner, domain::WorkerProfile, ports::Toolset,
///     services::WorkerNode,
/// };
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let music = WorkerNode::new(
///     WorkerProfile::new("Music", "Plays songs")?,
///     Arc::new(ScriptedReasoner::answering("Now playing Blue in Green")),
///     Toolset::new(),
/// );
///
/// let orchestrator = OrchestratorBuilder::new(
///     Arc::new(ScriptedCompletion::new(["Music", "FINISH"])),
///     Arc::new(DefaultClock),
/// )
/// .worker(music)
/// .build()?;
///
/// let report = orchestrator.run("play some jazz").await?;
/// assert_eq!(report.final_answer(), "(Music agent): Now playing Blue in Green");
/// # Ok(())
/// # }
/// ```
pub struct OrchestratorBuilder<C, K>
where
    C: CompletionService,
    K: Clock + Send + Sync,
{
    completion: Arc<C>,
    clock: Arc<K>,
    workers: Vec<WorkerNode>,
    prompt: SupervisorPrompt,
    config: GraphConfig,
}

impl<C, K> OrchestratorBuilder<C, K>
where
    C: CompletionService,
    K: Clock + Send + Sync,
{
    /// Creates a builder with the default prompt and configuration.
    #[must_use]
    pub fn new(completion: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            completion,
            clock,
            workers: Vec::new(),
            prompt: SupervisorPrompt::default(),
            config: GraphConfig::default(),
        }
    }

    /// Adds a worker. Registration order is routing order.
    #[must_use]
    pub fn worker(mut self, node: WorkerNode) -> Self {
        self.workers.push(node);
        self
    }

    /// Adds several workers.
    #[must_use]
    pub fn workers(mut self, nodes: impl IntoIterator<Item = WorkerNode>) -> Self {
        self.workers.extend(nodes);
        self
    }

    /// Replaces the supervisor prompt template.
    #[must_use]
    pub fn prompt(mut self, prompt: SupervisorPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Replaces the graph configuration.
    #[must_use]
    pub const fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the workers and renders the supervisor instruction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::graph::error::OrchestrationError::Registry`] when two
    /// workers share a name, or
    /// [`crate::graph::error::OrchestrationError::Prompt`] when the prompt
    /// template fails to render.
    pub fn build(self) -> OrchestrationResult<Orchestrator<C, K>> {
        let mut registry = WorkerRegistry::new();
        for node in self.workers {
            registry.register(node)?;
        }

        let supervisor = Supervisor::new(self.completion, &self.prompt, registry.profiles())?;
        tracing::debug!(
            workers = registry.len(),
            max_steps = ?self.config.max_steps,
            return_policy = ?self.config.return_policy,
            "orchestrator built"
        );
        Ok(Orchestrator::new(supervisor, registry, self.config, self.clock))
    }
}
