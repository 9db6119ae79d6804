//! When steps for orchestration BDD scenarios.

use super::world::{OrchestrationWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the user asks "{request}""#)]
fn user_asks(world: &mut OrchestrationWorld, request: String) -> Result<(), eyre::Report> {
    let orchestrator = world.orchestrator()?;
    world.last_run = Some(run_async(orchestrator.run(request)));
    Ok(())
}
