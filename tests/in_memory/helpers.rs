//! Shared test helpers for in-memory orchestration integration tests.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use switchyard::graph::{
    domain::GraphConfig,
    services::{Orchestrator, OrchestratorBuilder},
};
use switchyard::supervisor::adapters::ScriptedCompletion;
use switchyard::worker::{
    adapters::ScriptedReasoner, domain::WorkerProfile, ports::Toolset, services::WorkerNode,
};
use tokio::runtime::Runtime;

/// Orchestrator type wired with scripted adapters.
pub type ScriptedOrchestrator = Orchestrator<ScriptedCompletion, DefaultClock>;

/// Description given to the browser worker.
pub const BROWSER_DESCRIPTION: &str = "Searches the web and answers factual questions.";

/// Description given to the music worker.
pub const MUSIC_DESCRIPTION: &str = "Searches for songs and plays them on the active device.";

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Scripted reasoners for the browser and music workers.
#[derive(Debug, Clone)]
pub struct Crew {
    pub browser: ScriptedReasoner,
    pub music: ScriptedReasoner,
}

/// Provides a crew whose workers always answer.
#[fixture]
pub fn crew() -> Crew {
    Crew {
        browser: ScriptedReasoner::answering("Lima is the capital of Peru."),
        music: ScriptedReasoner::answering("Now playing 'So What' by Miles Davis."),
    }
}

/// Creates a worker node bound to `reasoner` and `toolset`.
///
/// # Panics
///
/// Panics if the name or description is invalid.
#[must_use]
pub fn worker(
    name: &str,
    description: &str,
    reasoner: &ScriptedReasoner,
    toolset: Toolset,
) -> WorkerNode {
    let profile = WorkerProfile::new(name, description).expect("valid worker profile");
    WorkerNode::new(profile, Arc::new(reasoner.clone()), toolset)
}

/// Builds an orchestrator over the browser and music workers.
///
/// # Panics
///
/// Panics if the orchestrator cannot be built.
#[must_use]
pub fn orchestrator(
    completion: &ScriptedCompletion,
    crew: &Crew,
    config: GraphConfig,
) -> ScriptedOrchestrator {
    OrchestratorBuilder::new(Arc::new(completion.clone()), Arc::new(DefaultClock))
        .worker(worker("Browser", BROWSER_DESCRIPTION, &crew.browser, Toolset::new()))
        .worker(worker("Music", MUSIC_DESCRIPTION, &crew.music, Toolset::new()))
        .config(config)
        .build()
        .expect("valid orchestrator")
}
