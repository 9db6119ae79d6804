//! Independent runs sharing one orchestrator.

use std::sync::Arc;

use super::helpers::{Crew, crew, orchestrator};
use rstest::rstest;
use switchyard::graph::domain::{GraphConfig, Termination};
use switchyard::supervisor::adapters::ScriptedCompletion;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_runs_keep_separate_logs(crew: Crew) {
    let completion = ScriptedCompletion::always("FINISH");
    let orchestrator = Arc::new(orchestrator(&completion, &crew, GraphConfig::default()));

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let shared = Arc::clone(&orchestrator);
            tokio::spawn(async move { shared.run(format!("request {index}")).await })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let report = handle
            .await
            .expect("task joins")
            .expect("run succeeds");
        assert_eq!(report.termination(), Termination::Finished);
        assert_eq!(report.log().len(), 2);
        assert_eq!(
            report.log().messages().first().map(|message| message.content()),
            Some(format!("request {index}"))
        );
    }
    assert_eq!(completion.request_count(), 8);
}
