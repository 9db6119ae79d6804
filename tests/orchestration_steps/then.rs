//! Then steps for orchestration BDD scenarios.

use super::world::OrchestrationWorld;
use rstest_bdd_macros::then;
use switchyard::graph::domain::Termination;

fn expect_termination(
    world: &OrchestrationWorld,
    expected: Termination,
) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.termination() != expected {
        return Err(eyre::eyre!(
            "expected termination '{expected}', found '{}'",
            report.termination()
        ));
    }
    Ok(())
}

#[then("the run finished")]
fn run_finished(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    expect_termination(world, Termination::Finished)
}

#[then("the run stopped at the step budget of {limit:usize}")]
fn run_stopped_at_budget(world: &OrchestrationWorld, limit: usize) -> Result<(), eyre::Report> {
    expect_termination(world, Termination::StepBudgetExhausted { limit })
}

#[then("the run ended after the worker turn")]
fn run_ended_after_worker(world: &OrchestrationWorld) -> Result<(), eyre::Report> {
    expect_termination(world, Termination::WorkerReturnedEnd)
}

#[then(r#"the log roles are "{roles}""#)]
fn log_roles_are(world: &OrchestrationWorld, roles: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let actual: Vec<&str> = report
        .log()
        .iter()
        .map(|message| message.role().as_str())
        .collect();
    let expected: Vec<&str> = roles.split(',').map(str::trim).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected roles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the "{name}" worker was invoked {count:usize} times"#)]
fn worker_invoked(
    world: &OrchestrationWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let reasoner = world
        .reasoner(&name)
        .ok_or_else(|| eyre::eyre!("no worker named {name} in scenario world"))?;
    let actual = reasoner.invocation_count();
    if actual != count {
        return Err(eyre::eyre!(
            "expected {name} to be invoked {count} times, found {actual}"
        ));
    }
    Ok(())
}

#[then(r#"the final answer is "{answer}""#)]
fn final_answer_is(world: &OrchestrationWorld, answer: String) -> Result<(), eyre::Report> {
    let actual = world.report()?.final_answer();
    if actual != answer {
        return Err(eyre::eyre!("expected final answer '{answer}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the final answer mentions "{text}""#)]
fn final_answer_mentions(world: &OrchestrationWorld, text: String) -> Result<(), eyre::Report> {
    let actual = world.report()?.final_answer();
    if !actual.contains(&text) {
        return Err(eyre::eyre!("final answer '{actual}' does not mention '{text}'"));
    }
    Ok(())
}
