//! The outcome of an orchestration run.

use super::GraphNode;
use crate::conversation::domain::{MessageLog, RunId, SequenceNumber};
use crate::supervisor::domain::Decision;
use crate::worker::ports::ReasoningError;
use std::fmt;

/// Answer reported when no worker produced one.
pub const NO_ANSWER: &str = "The task is complete, but I don't have a specific answer to show.";

/// Why a run reached the `End` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The supervisor chose `FINISH`, or an unrecognised token routed to
    /// `End`.
    Finished,
    /// A worker turn ended the run under [`super::ReturnPolicy::End`].
    WorkerReturnedEnd,
    /// The step budget ran out before the supervisor finished.
    StepBudgetExhausted {
        /// The configured budget.
        limit: usize,
    },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => f.write_str("finished"),
            Self::WorkerReturnedEnd => f.write_str("worker returned end"),
            Self::StepBudgetExhausted { limit } => {
                write!(f, "step budget of {limit} exhausted")
            }
        }
    }
}

/// What happened during one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// The supervisor appended a routing decision.
    Decided(Decision),
    /// A worker appended its answer.
    Answered,
    /// A worker's reasoning loop failed and its failure was appended.
    Failed(ReasoningError),
}

/// Record of one executed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The node that executed.
    pub node: GraphNode,
    /// Sequence number of the message the node appended.
    pub sequence: SequenceNumber,
    /// What happened.
    pub event: StepEvent,
}

/// The final state of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    run_id: RunId,
    log: MessageLog,
    steps: Vec<StepRecord>,
    termination: Termination,
}

impl RunReport {
    pub(crate) const fn new(
        run_id: RunId,
        log: MessageLog,
        steps: Vec<StepRecord>,
        termination: Termination,
    ) -> Self {
        Self {
            run_id,
            log,
            steps,
            termination,
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Returns the final message log.
    #[must_use]
    pub const fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Consumes the report and returns the final message log.
    #[must_use]
    pub fn into_log(self) -> MessageLog {
        self.log
    }

    /// Returns one record per executed node, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Returns why the run ended.
    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the number of supervisor steps.
    #[must_use]
    pub fn supervisor_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.node == GraphNode::Supervisor)
            .count()
    }

    /// Returns the number of worker invocations.
    #[must_use]
    pub fn worker_invocations(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.node, GraphNode::Worker(_)))
            .count()
    }

    /// Returns the last worker answer, or a fixed notice when no worker
    /// answered.
    #[must_use]
    pub fn final_answer(&self) -> String {
        self.log
            .final_answer()
            .unwrap_or_else(|| NO_ANSWER.to_owned())
    }
}
