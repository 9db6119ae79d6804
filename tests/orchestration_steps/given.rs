//! Given steps for orchestration BDD scenarios.

use super::world::OrchestrationWorld;
use rstest_bdd_macros::given;
use switchyard::graph::domain::GraphConfig;
use switchyard::worker::{adapters::ScriptedReasoner, ports::ReasoningError};

#[given(r#"a "{name}" worker that answers "{answer}""#)]
fn worker_that_answers(world: &mut OrchestrationWorld, name: String, answer: String) {
    world
        .workers
        .push((name, ScriptedReasoner::answering(answer)));
}

#[given(r#"a "{name}" worker whose reasoning fails with "{reason}""#)]
fn worker_that_fails(world: &mut OrchestrationWorld, name: String, reason: String) {
    world.workers.push((
        name,
        ScriptedReasoner::failing(ReasoningError::tool_invocation("search", reason)),
    ));
}

#[given(r#"the supervisor replies "{reply}""#)]
fn supervisor_replies(world: &mut OrchestrationWorld, reply: String) {
    world.replies.push(reply);
}

#[given(r#"the supervisor always replies "{reply}""#)]
fn supervisor_always_replies(world: &mut OrchestrationWorld, reply: String) {
    world.standing_reply = Some(reply);
}

#[given("a step budget of {limit:usize}")]
fn step_budget(world: &mut OrchestrationWorld, limit: usize) {
    world.config = world.config.with_max_steps(limit);
}

#[given("single-turn wiring")]
fn single_turn_wiring(world: &mut OrchestrationWorld) {
    world.config = GraphConfig::single_turn();
}
