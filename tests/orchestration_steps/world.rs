//! Shared world state for orchestration BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use switchyard::graph::{
    domain::{GraphConfig, RunReport},
    error::OrchestrationError,
    services::{Orchestrator, OrchestratorBuilder},
};
use switchyard::supervisor::adapters::ScriptedCompletion;
use switchyard::worker::{
    adapters::ScriptedReasoner, domain::WorkerProfile, ports::Toolset, services::WorkerNode,
};

/// Orchestrator type used by the BDD world.
pub type TestOrchestrator = Orchestrator<ScriptedCompletion, DefaultClock>;

/// Scenario world for orchestration behaviour tests.
pub struct OrchestrationWorld {
    pub workers: Vec<(String, ScriptedReasoner)>,
    pub replies: Vec<String>,
    pub standing_reply: Option<String>,
    pub config: GraphConfig,
    pub last_run: Option<Result<RunReport, OrchestrationError>>,
}

impl OrchestrationWorld {
    /// Creates a world with no workers and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            replies: Vec::new(),
            standing_reply: None,
            config: GraphConfig::default(),
            last_run: None,
        }
    }

    /// Builds an orchestrator from the workers and replies collected so far.
    pub fn orchestrator(&self) -> Result<TestOrchestrator, eyre::Report> {
        let mut completion = ScriptedCompletion::new(self.replies.iter().cloned());
        if let Some(reply) = &self.standing_reply {
            completion = completion.with_fallback(Ok(reply.clone()));
        }

        let mut builder = OrchestratorBuilder::new(Arc::new(completion), Arc::new(DefaultClock))
            .config(self.config);
        for (name, reasoner) in &self.workers {
            let profile = WorkerProfile::new(name.as_str(), format!("{name} specialist"))
                .wrap_err_with(|| format!("build profile for worker {name}"))?;
            builder = builder.worker(WorkerNode::new(
                profile,
                Arc::new(reasoner.clone()),
                Toolset::new(),
            ));
        }
        builder.build().wrap_err("build orchestrator for scenario")
    }

    /// Returns the reasoner registered under `name`.
    pub fn reasoner(&self, name: &str) -> Option<&ScriptedReasoner> {
        self.workers
            .iter()
            .find(|(worker, _)| worker == name)
            .map(|(_, reasoner)| reasoner)
    }

    /// Returns the report of the last successful run.
    pub fn report(&self) -> Result<&RunReport, eyre::Report> {
        match &self.last_run {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("run failed: {err}")),
            None => Err(eyre::eyre!("no run has been executed in this scenario")),
        }
    }
}

impl Default for OrchestrationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OrchestrationWorld {
    OrchestrationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
