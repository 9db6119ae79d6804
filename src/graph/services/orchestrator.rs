//! Drives one conversation through the orchestration graph.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::Instrument;

use crate::conversation::domain::{MessageLog, RoutingVocabulary, RunId};
use crate::graph::{
    domain::{
        GraphConfig, GraphNode, ReturnPolicy, RunReport, StepEvent, StepRecord, Termination,
    },
    error::{OrchestrationError, OrchestrationResult},
    router,
};
use crate::supervisor::{ports::CompletionService, services::Supervisor};
use crate::worker::services::{WorkerRegistry, WorkerStatus};

/// A built orchestration graph.
///
/// One orchestrator may drive many runs; each run owns its own log and
/// executes its steps strictly one after another.
pub struct Orchestrator<C, K>
where
    C: CompletionService,
    K: Clock + Send + Sync,
{
    supervisor: Supervisor<C>,
    registry: WorkerRegistry,
    config: GraphConfig,
    clock: Arc<K>,
}

impl<C, K> Orchestrator<C, K>
where
    C: CompletionService,
    K: Clock + Send + Sync,
{
    pub(crate) const fn new(
        supervisor: Supervisor<C>,
        registry: WorkerRegistry,
        config: GraphConfig,
        clock: Arc<K>,
    ) -> Self {
        Self {
            supervisor,
            registry,
            config,
            clock,
        }
    }

    /// Returns the registered workers.
    #[must_use]
    pub const fn registry(&self) -> &WorkerRegistry {
        &self.registry
    }

    /// Returns the graph configuration.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the supervisor.
    #[must_use]
    pub const fn supervisor(&self) -> &Supervisor<C> {
        &self.supervisor
    }

    /// Creates an empty log whose vocabulary matches the registered workers.
    #[must_use]
    pub fn new_log(&self) -> MessageLog {
        MessageLog::new(self.registry.vocabulary())
    }

    /// Seeds a log with `request` and drives it to the `End` state.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationError::Conversation`] when the request is
    /// blank, plus every error listed on [`Orchestrator::run_with_log`].
    pub async fn run(&self, request: impl Into<String>) -> OrchestrationResult<RunReport> {
        let log = MessageLog::seeded(self.registry.vocabulary(), request, &*self.clock)?;
        self.run_with_log(log).await
    }

    /// Drives an existing log from the `Supervisor` state to `End`.
    ///
    /// The log must have been created for this orchestrator's workers, for
    /// example with [`Orchestrator::new_log`].
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationError::VocabularyMismatch`] when the log's
    /// vocabulary differs from the registered workers,
    /// [`OrchestrationError::MissingContext`] when a worker is dispatched on
    /// a log without a human or agent-result message, and
    /// [`OrchestrationError::Conversation`] when the log rejects an append.
    pub async fn run_with_log(&self, log: MessageLog) -> OrchestrationResult<RunReport> {
        let registered = self.registry.vocabulary();
        if log.vocabulary() != &registered {
            return Err(OrchestrationError::VocabularyMismatch {
                log: join_tokens(log.vocabulary()),
                registered: join_tokens(&registered),
            });
        }

        let run_id = RunId::new();
        let span = tracing::info_span!("orchestration_run", %run_id);
        self.drive(run_id, log).instrument(span).await
    }

    async fn drive(&self, run_id: RunId, mut log: MessageLog) -> OrchestrationResult<RunReport> {
        let mut steps: Vec<StepRecord> = Vec::new();
        let mut current = GraphNode::Supervisor;
        let mut termination = Termination::Finished;

        while !current.is_end() {
            if let Some(limit) = self.config.max_steps
                && steps.len() >= limit
            {
                tracing::warn!(limit, "step budget exhausted, ending run");
                termination = Termination::StepBudgetExhausted { limit };
                break;
            }

            current = match current {
                GraphNode::Supervisor => {
                    let outcome = self.supervisor.step(&mut log, &*self.clock).await?;
                    steps.push(StepRecord {
                        node: GraphNode::Supervisor,
                        sequence: outcome.sequence,
                        event: StepEvent::Decided(outcome.decision),
                    });
                    let next = GraphNode::from(router::route(log.latest(), &self.registry));
                    if next.is_end() {
                        termination = Termination::Finished;
                    }
                    next
                }
                GraphNode::Worker(name) => {
                    let node = self
                        .registry
                        .get(&name)
                        .ok_or_else(|| OrchestrationError::UnknownWorker(name.clone()))?;
                    let outcome = node.execute(&mut log, &*self.clock).await?;
                    let event = match outcome.status {
                        WorkerStatus::Answered => StepEvent::Answered,
                        WorkerStatus::Failed(error) => StepEvent::Failed(error),
                    };
                    steps.push(StepRecord {
                        node: GraphNode::Worker(name),
                        sequence: outcome.sequence,
                        event,
                    });
                    match self.config.return_policy {
                        ReturnPolicy::ToSupervisor => GraphNode::Supervisor,
                        ReturnPolicy::End => {
                            termination = Termination::WorkerReturnedEnd;
                            GraphNode::End
                        }
                    }
                }
                GraphNode::End => GraphNode::End,
            };
        }

        tracing::info!(
            steps = steps.len(),
            messages = log.len(),
            %termination,
            "orchestration run ended"
        );
        Ok(RunReport::new(run_id, log, steps, termination))
    }
}

fn join_tokens(vocabulary: &RoutingVocabulary) -> String {
    vocabulary.tokens().collect::<Vec<_>>().join(", ")
}

impl<C, K> fmt::Debug for Orchestrator<C, K>
where
    C: CompletionService,
    K: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("supervisor", &self.supervisor)
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
