// ABOUTME: Dispatcher test double that records requests.
// ABOUTME: Replays queued replies in order, defaulting to an empty success.

use async_trait::async_trait;
use dockmate::dispatch::{DispatchError, Dispatcher, Reply, Request};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;

#[derive(Default)]
pub struct RecordingDispatcher {
    requests: Mutex<Vec<Request>>,
    replies: Mutex<VecDeque<Result<Reply, DispatchError>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next dispatch.
    pub fn reply(self, outcome: Result<Reply, DispatchError>) -> Self {
        self.replies.lock().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// The single recorded request; panics unless exactly one was made.
    pub fn only_request(&self) -> Request {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one dispatch");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError> {
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Reply::ok(Value::Null)))
    }
}
