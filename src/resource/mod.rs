//! Resource abstraction layer
//!
//! Every API resource exposes the same handful of operations. Rather than
//! repeating validation and dispatch in each module, an operation is
//! described as data ([`Operation`]) and executed by one generic
//! [`Resource`]:
//!
//! 1. validate the identifier (if the operation needs one), then the payload
//! 2. build the request descriptor
//! 3. dispatch it through the shared transport
//!
//! A validation failure settles the call through
//! [`reject`](crate::dispatch::reject) and the transport is never invoked.
//!
//! # Resources
//!
//! - [`subaccounts`] - `list`, `get`, `create`, `update`
//! - [`webhooks`] - `list`, `get`, `create`, `update`, `delete`

pub mod subaccounts;
pub mod webhooks;

use crate::dispatch::{build_request, dispatch, reject, require_id, require_payload, Callback, Outcome};
use crate::transport::{Transport, Verb};
use serde_json::Value;
use std::sync::Arc;

pub use subaccounts::Subaccounts;
pub use webhooks::Webhooks;

/// Shape of one resource operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub verb: Verb,
    pub needs_id: bool,
    pub needs_payload: bool,
}

impl Operation {
    pub const LIST: Operation = Operation::new(Verb::Get, false, false);
    pub const GET: Operation = Operation::new(Verb::Get, true, false);
    pub const CREATE: Operation = Operation::new(Verb::Post, false, true);
    pub const UPDATE: Operation = Operation::new(Verb::Put, true, true);
    pub const DELETE: Operation = Operation::new(Verb::Delete, true, false);

    pub const fn new(verb: Verb, needs_id: bool, needs_payload: bool) -> Self {
        Self {
            verb,
            needs_id,
            needs_payload,
        }
    }
}

/// Generic executor for the operations of one resource.
///
/// Holds nothing but the shared transport and two names, so a single
/// instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct Resource {
    transport: Arc<dyn Transport>,
    name: &'static str,
    label: &'static str,
}

impl Resource {
    /// `name` is the URI segment, `label` names the payload in messages
    pub fn new(transport: Arc<dyn Transport>, name: &'static str, label: &'static str) -> Self {
        Self {
            transport,
            name,
            label,
        }
    }

    /// Validate, build and dispatch one call.
    ///
    /// Arguments an operation does not take are ignored.
    pub fn execute(
        &self,
        operation: Operation,
        id: Option<&str>,
        payload: Option<Value>,
        callback: Option<Callback<Value>>,
    ) -> Outcome<Value> {
        let id = if operation.needs_id {
            match require_id(id) {
                Ok(id) => Some(id),
                Err(e) => return reject(e, callback),
            }
        } else {
            None
        };

        let body = if operation.needs_payload {
            match require_payload(payload, self.label) {
                Ok(body) => Some(body),
                Err(e) => return reject(e, callback),
            }
        } else {
            None
        };

        let request = build_request(self.name, operation.verb, id, body);
        tracing::debug!("dispatch: {} {}", request.verb(), request.uri());

        let transport = Arc::clone(&self.transport);
        dispatch(move || async move { transport.send(request).await }, callback)
    }
}
