//! End-to-end runs over scripted adapters.

use super::helpers::{Crew, crew, orchestrator, runtime};
use rstest::rstest;
use switchyard::conversation::domain::{MessageBody, Role, RoutingToken, WorkerName};
use switchyard::graph::domain::{GraphConfig, NO_ANSWER, StepEvent, Termination};
use switchyard::supervisor::{adapters::ScriptedCompletion, ports::CompletionError};
use tokio::runtime::Runtime;

fn name(value: &str) -> WorkerName {
    WorkerName::new(value).expect("valid name")
}

#[rstest]
fn browser_then_music_then_finish(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["Browser", "Music", "FINISH"]);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    let report = rt
        .block_on(orchestrator.run("find a Miles Davis classic and play it"))
        .expect("run succeeds");

    let bodies: Vec<&MessageBody> = report.log().iter().map(|message| message.body()).collect();
    assert!(matches!(bodies.first(), Some(MessageBody::Human { .. })));
    assert_eq!(
        report
            .log()
            .iter()
            .filter_map(|message| message.routing_token().cloned())
            .collect::<Vec<_>>(),
        [
            RoutingToken::Worker(name("Browser")),
            RoutingToken::Worker(name("Music")),
            RoutingToken::Finish,
        ]
    );
    assert_eq!(report.log().len(), 6);
    assert_eq!(report.worker_invocations(), 2);
    assert_eq!(
        report.final_answer(),
        "(Music agent): Now playing 'So What' by Miles Davis."
    );
}

#[rstest]
fn music_receives_browser_answer_as_task(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["Browser", "Music", "FINISH"]);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    rt.block_on(orchestrator.run("find a Miles Davis classic and play it"))
        .expect("run succeeds");

    assert_eq!(
        crew.browser.tasks(),
        ["find a Miles Davis classic and play it"]
    );
    assert_eq!(
        crew.music.tasks(),
        ["(Browser agent): Lima is the capital of Peru."]
    );
}

#[rstest]
#[case::blank("   ")]
#[case::prose("I think the Browser agent should handle this")]
#[case::typo("Musik")]
#[case::lowercase("finish")]
#[case::two_tokens("Browser Music")]
fn unusable_supervisor_output_finishes_run(
    runtime: std::io::Result<Runtime>,
    crew: Crew,
    #[case] reply: &str,
) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::always(reply);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    let report = rt.block_on(orchestrator.run("hello")).expect("run succeeds");

    assert_eq!(report.termination(), Termination::Finished);
    assert_eq!(report.supervisor_steps(), 1);
    assert_eq!(report.worker_invocations(), 0);
    assert_eq!(report.final_answer(), NO_ANSWER);
    let Some(StepEvent::Decided(decision)) = report.steps().first().map(|step| &step.event) else {
        panic!("expected a supervisor decision");
    };
    assert!(decision.is_fallback());
}

#[rstest]
fn padded_worker_token_is_accepted(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["\n  Music \n", "FINISH"]);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    let report = rt.block_on(orchestrator.run("play jazz")).expect("run succeeds");

    assert_eq!(crew.music.invocation_count(), 1);
    assert_eq!(report.termination(), Termination::Finished);
}

#[rstest]
fn service_outage_mid_run_finishes(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["Music"])
        .then_fail(CompletionError::Unavailable("connection refused".to_owned()));
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    let report = rt.block_on(orchestrator.run("play jazz")).expect("run succeeds");

    assert_eq!(report.termination(), Termination::Finished);
    assert_eq!(
        report.log().iter().map(|message| message.role()).collect::<Vec<_>>(),
        [Role::Human, Role::Control, Role::AgentResult, Role::Control]
    );
}

#[rstest]
fn unbounded_run_relies_on_finish(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let replies = std::iter::repeat_n("Browser", 12).chain(["FINISH"]);
    let completion = ScriptedCompletion::new(replies);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::unbounded());

    let report = rt.block_on(orchestrator.run("research")).expect("run succeeds");

    assert_eq!(report.termination(), Termination::Finished);
    assert_eq!(crew.browser.invocation_count(), 12);
    assert_eq!(report.steps().len(), 25);
}

#[rstest]
fn report_log_serialises_with_tagged_bodies(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["Music", "FINISH"]);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    let report = rt.block_on(orchestrator.run("play jazz")).expect("run succeeds");
    let json = serde_json::to_value(report.log()).expect("log serialises");

    let roles: Vec<&str> = json["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .filter_map(|message| message["body"]["role"].as_str())
        .collect();
    assert_eq!(roles, ["human", "control", "agent_result", "control"]);
}
