//! Scripted completion service for tests and demos.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::supervisor::ports::{
    CompletionError, CompletionRequest, CompletionResult, CompletionService,
};

/// Thread-safe completion service that replays queued replies.
///
/// Every request is recorded. Once the queue is exhausted the fallback
/// reply is returned; without a fallback the service reports itself
/// unavailable.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletion {
    state: Arc<Mutex<CompletionState>>,
}

#[derive(Debug, Default)]
struct CompletionState {
    replies: VecDeque<CompletionResult<String>>,
    fallback: Option<CompletionResult<String>>,
    requests: Vec<CompletionRequest>,
}

impl ScriptedCompletion {
    /// Creates a service that returns `replies` in order.
    #[must_use]
    pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        let replies = replies.into_iter().map(|reply| Ok(reply.into())).collect();
        Self {
            state: Arc::new(Mutex::new(CompletionState {
                replies,
                ..CompletionState::default()
            })),
        }
    }

    /// Creates a service that returns `reply` for every request.
    #[must_use]
    pub fn always(reply: impl Into<String>) -> Self {
        Self::new(Vec::<String>::new()).with_fallback(Ok(reply.into()))
    }

    /// Queues a failure after the replies already queued.
    #[must_use]
    pub fn then_fail(self, error: CompletionError) -> Self {
        self.lock().replies.push_back(Err(error));
        self
    }

    /// Sets the result returned once the queue is exhausted.
    #[must_use]
    pub fn with_fallback(self, result: CompletionResult<String>) -> Self {
        self.lock().fallback = Some(result);
        self
    }

    /// Returns every request received, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of requests received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CompletionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<String> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        state
            .replies
            .pop_front()
            .or_else(|| state.fallback.clone())
            .unwrap_or_else(|| {
                Err(CompletionError::Unavailable(
                    "scripted completion has no remaining replies".to_owned(),
                ))
            })
    }
}
