//! Transport abstraction
//!
//! The transport performs the actual network exchange for a
//! [`RequestDescriptor`]. Resource modules only ever see the [`Transport`]
//! trait, so the HTTP implementation can be swapped for a mock in tests.
//!
//! # Module Structure
//!
//! - [`http`] - reqwest-backed transport for the SparkPost REST API
//! - `mock` - in-memory recording transport for tests (`testing` feature)

pub mod http;
#[cfg(any(test, feature = "testing"))]
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub use http::{ApiFailure, HttpTransport};
#[cfg(any(test, feature = "testing"))]
pub use mock::MockTransport;

/// HTTP verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized request handed to the transport.
///
/// `uri` is relative to the API root and carries no leading slash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    verb: Verb,
    uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    json: Option<Value>,
}

impl RequestDescriptor {
    pub(crate) fn new(verb: Verb, uri: String, json: Option<Value>) -> Self {
        Self { verb, uri, json }
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Request body, if the operation carries one
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }
}

/// Performs requests against the remote service.
///
/// Implementations must be safe to call concurrently; one instance is shared
/// by every resource module of a client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: RequestDescriptor) -> Result<Value>;

    async fn post(&self, request: RequestDescriptor) -> Result<Value>;

    async fn put(&self, request: RequestDescriptor) -> Result<Value>;

    async fn delete(&self, request: RequestDescriptor) -> Result<Value>;

    /// Route a request to the method matching its verb
    async fn send(&self, request: RequestDescriptor) -> Result<Value> {
        match request.verb() {
            Verb::Get => self.get(request).await,
            Verb::Post => self.post(request).await,
            Verb::Put => self.put(request).await,
            Verb::Delete => self.delete(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_without_absent_body() {
        let request = RequestDescriptor::new(Verb::Get, "subaccounts".to_string(), None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"verb": "GET", "uri": "subaccounts"})
        );
    }

    #[tokio::test]
    async fn test_send_routes_by_verb() {
        let transport = MockTransport::new();
        for verb in [Verb::Get, Verb::Post, Verb::Put, Verb::Delete] {
            transport
                .send(RequestDescriptor::new(verb, "webhooks".to_string(), None))
                .await
                .unwrap();
        }

        let verbs: Vec<Verb> = transport.requests().iter().map(|r| r.verb()).collect();
        assert_eq!(verbs, vec![Verb::Get, Verb::Post, Verb::Put, Verb::Delete]);
    }
}
