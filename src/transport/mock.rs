//! Recording transport for tests
//!
//! `MockTransport` records every request it receives, keyed by the transport
//! method that was called, and answers from a queue of scripted responses.
//! Once the queue is empty every call succeeds with an empty JSON object.
//!
//! ```ignore
//! use sparkpost::transport::{MockTransport, Verb};
//! use sparkpost::SparkPost;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let transport = MockTransport::new();
//! transport.respond_with(Ok(serde_json::json!({"results": []})));
//!
//! let client = SparkPost::new(Arc::new(transport.clone()));
//! client.subaccounts().list(None).await.unwrap();
//!
//! assert_eq!(transport.calls_to(Verb::Get)[0].uri(), "subaccounts");
//! # }
//! ```

use super::{RequestDescriptor, Transport, Verb};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct MockState {
    calls: Vec<(Verb, RequestDescriptor)>,
    responses: VecDeque<Result<Value>>,
}

/// In-memory transport with call recording and scripted responses.
///
/// Cloning shares the same recording, so a test can hand one clone to the
/// client and inspect the other.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the recording from the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue the outcome of the next unanswered call
    pub fn respond_with(&self, response: Result<Value>) {
        self.state().responses.push_back(response);
    }

    /// Queue a failure for the next unanswered call
    pub fn fail_with(&self, error: anyhow::Error) {
        self.respond_with(Err(error));
    }

    /// Every request received, in arrival order
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.state().calls.iter().map(|(_, r)| r.clone()).collect()
    }

    /// Requests passed to the transport method for `verb`
    pub fn calls_to(&self, verb: Verb) -> Vec<RequestDescriptor> {
        self.state()
            .calls
            .iter()
            .filter(|(method, _)| *method == verb)
            .map(|(_, r)| r.clone())
            .collect()
    }

    /// Total number of transport invocations
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    fn record(&self, method: Verb, request: RequestDescriptor) -> Result<Value> {
        let mut state = self.state();
        state.calls.push((method, request));
        state.responses.pop_front().unwrap_or_else(|| Ok(json!({})))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: RequestDescriptor) -> Result<Value> {
        self.record(Verb::Get, request)
    }

    async fn post(&self, request: RequestDescriptor) -> Result<Value> {
        self.record(Verb::Post, request)
    }

    async fn put(&self, request: RequestDescriptor) -> Result<Value> {
        self.record(Verb::Put, request)
    }

    async fn delete(&self, request: RequestDescriptor) -> Result<Value> {
        self.record(Verb::Delete, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses_are_consumed_in_order() {
        let transport = MockTransport::new();
        transport.respond_with(Ok(json!({"results": 1})));
        transport.fail_with(anyhow::anyhow!("boom"));

        let request = RequestDescriptor::new(Verb::Get, "subaccounts".to_string(), None);
        assert_eq!(
            transport.get(request.clone()).await.unwrap(),
            json!({"results": 1})
        );
        assert_eq!(
            transport.get(request.clone()).await.unwrap_err().to_string(),
            "boom"
        );
        assert_eq!(transport.get(request).await.unwrap(), json!({}));
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_recording() {
        let transport = MockTransport::new();
        let other = transport.clone();

        other
            .put(RequestDescriptor::new(
                Verb::Put,
                "subaccounts/1".to_string(),
                Some(json!({})),
            ))
            .await
            .unwrap();

        assert_eq!(transport.calls_to(Verb::Put).len(), 1);
        assert!(transport.calls_to(Verb::Get).is_empty());
    }
}
