//! What the supervisor is shown on each step.

use super::helpers::{BROWSER_DESCRIPTION, Crew, MUSIC_DESCRIPTION, crew, orchestrator, runtime};
use rstest::rstest;
use switchyard::graph::domain::GraphConfig;
use switchyard::supervisor::{
    adapters::ScriptedCompletion,
    ports::{ChatMessage, ChatRole},
};
use tokio::runtime::Runtime;

#[rstest]
fn supervisor_sees_growing_history(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::new(["Music", "FINISH"]);
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    rt.block_on(orchestrator.run("play So What")).expect("run succeeds");

    let requests = completion.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests.first().map(|request| request.messages.clone()),
        Some(vec![ChatMessage::new(ChatRole::User, "play So What")])
    );
    assert_eq!(
        requests.get(1).map(|request| request.messages.clone()),
        Some(vec![
            ChatMessage::new(ChatRole::User, "play So What"),
            ChatMessage::new(ChatRole::Assistant, "Music"),
            ChatMessage::new(
                ChatRole::Assistant,
                "(Music agent): Now playing 'So What' by Miles Davis."
            ),
        ])
    );
}

#[rstest]
fn instruction_lists_workers_then_finish(runtime: std::io::Result<Runtime>, crew: Crew) {
    let rt = runtime.expect("runtime");
    let completion = ScriptedCompletion::always("FINISH");
    let orchestrator = orchestrator(&completion, &crew, GraphConfig::default());

    rt.block_on(orchestrator.run("hello")).expect("run succeeds");

    let requests = completion.requests();
    let system = &requests.first().expect("one request").system;
    let browser = system.find(BROWSER_DESCRIPTION).expect("browser listed");
    let music = system.find(MUSIC_DESCRIPTION).expect("music listed");
    let finish = system.rfind("FINISH").expect("FINISH listed");
    assert!(browser < music);
    assert!(music < finish);
    assert!(requests.iter().all(|request| request.system == *system));
}
