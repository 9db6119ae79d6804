//! Workers calling tools through scripted reasoning loops.

use std::sync::Arc;

use mockable::DefaultClock;
use serde_json::{Value, json};
use switchyard::graph::{domain::StepEvent, services::OrchestratorBuilder};
use switchyard::supervisor::adapters::ScriptedCompletion;
use switchyard::worker::{
    adapters::{FunctionTool, ScriptedReasoner, ScriptedStep},
    ports::{ReasoningError, Toolset},
};

use super::helpers::{MUSIC_DESCRIPTION, worker};

fn music_tools() -> Toolset {
    Toolset::new()
        .with_tool(Arc::new(FunctionTool::new(
            "play_song",
            "Plays the named song on the active device.",
            |arguments: Value| match arguments["song"].as_str() {
                Some(song) => format!("Now playing {song}."),
                None => "Error: a song title is required.".to_owned(),
            },
        )))
        .with_tool(Arc::new(FunctionTool::new(
            "current_song",
            "Reports the song that is playing.",
            |_: Value| "Nothing is playing.".to_owned(),
        )))
}

#[tokio::test(flavor = "multi_thread")]
async fn tool_observation_becomes_worker_answer() {
    let reasoner = ScriptedReasoner::new([ScriptedStep::use_tool(
        "play_song",
        json!({ "song": "So What" }),
    )]);
    let orchestrator = OrchestratorBuilder::new(
        Arc::new(ScriptedCompletion::new(["Music", "FINISH"])),
        Arc::new(DefaultClock),
    )
    .worker(worker("Music", MUSIC_DESCRIPTION, &reasoner, music_tools()))
    .build()
    .expect("valid orchestrator");

    let report = orchestrator.run("play So What").await.expect("run succeeds");

    assert_eq!(report.final_answer(), "(Music agent): Now playing So What.");
}

#[tokio::test(flavor = "multi_thread")]
async fn tool_error_strings_are_answers_not_failures() {
    let reasoner = ScriptedReasoner::new([ScriptedStep::use_tool("play_song", json!({}))]);
    let orchestrator = OrchestratorBuilder::new(
        Arc::new(ScriptedCompletion::new(["Music", "FINISH"])),
        Arc::new(DefaultClock),
    )
    .worker(worker("Music", MUSIC_DESCRIPTION, &reasoner, music_tools()))
    .build()
    .expect("valid orchestrator");

    let report = orchestrator.run("play something").await.expect("run succeeds");

    assert_eq!(
        report.final_answer(),
        "(Music agent): Error: a song title is required."
    );
    assert!(
        report
            .steps()
            .iter()
            .all(|step| !matches!(step.event, StepEvent::Failed(_)))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_tool_is_recorded_as_failure() {
    let reasoner = ScriptedReasoner::new([ScriptedStep::use_tool("skip_track", json!({}))]);
    let orchestrator = OrchestratorBuilder::new(
        Arc::new(ScriptedCompletion::new(["Music", "FINISH"])),
        Arc::new(DefaultClock),
    )
    .worker(worker("Music", MUSIC_DESCRIPTION, &reasoner, music_tools()))
    .build()
    .expect("valid orchestrator");

    let report = orchestrator.run("skip this song").await.expect("run succeeds");

    assert!(report.steps().iter().any(|step| {
        step.event == StepEvent::Failed(ReasoningError::UnknownTool("skip_track".to_owned()))
    }));
    assert!(report.final_answer().contains("unknown tool 'skip_track'"));
}
