//! Subaccounts
//!
//! `subaccounts` and `subaccounts/{id}` endpoints.

use super::{Operation, Resource};
use crate::dispatch::{Callback, Outcome};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Subaccount operations
#[derive(Clone)]
pub struct Subaccounts {
    resource: Resource,
}

impl Subaccounts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(transport, "subaccounts", "subaccount"),
        }
    }

    /// List all subaccounts
    pub fn list(&self, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::LIST, None, None, callback)
    }

    /// Get one subaccount by id
    pub fn get(&self, id: Option<&str>, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::GET, id, None, callback)
    }

    /// Create a subaccount from `subaccount`, sent as-is
    pub fn create(
        &self,
        subaccount: Option<Value>,
        callback: Option<Callback<Value>>,
    ) -> Outcome<Value> {
        self.resource
            .execute(Operation::CREATE, None, subaccount, callback)
    }

    /// Update subaccount `id` with `subaccount`, sent as-is
    pub fn update(
        &self,
        id: Option<&str>,
        subaccount: Option<Value>,
        callback: Option<Callback<Value>>,
    ) -> Outcome<Value> {
        self.resource
            .execute(Operation::UPDATE, id, subaccount, callback)
    }
}
