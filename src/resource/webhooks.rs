//! Webhooks

use super::{Operation, Resource};
use crate::dispatch::{Callback, Outcome};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Webhook operations
#[derive(Clone)]
pub struct Webhooks {
    resource: Resource,
}

impl Webhooks {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(transport, "webhooks", "webhook"),
        }
    }

    pub fn list(&self, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::LIST, None, None, callback)
    }

    pub fn get(&self, id: Option<&str>, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::GET, id, None, callback)
    }

    pub fn create(&self, webhook: Option<Value>, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::CREATE, None, webhook, callback)
    }

    pub fn update(
        &self,
        id: Option<&str>,
        webhook: Option<Value>,
        callback: Option<Callback<Value>>,
    ) -> Outcome<Value> {
        self.resource.execute(Operation::UPDATE, id, webhook, callback)
    }

    pub fn delete(&self, id: Option<&str>, callback: Option<Callback<Value>>) -> Outcome<Value> {
        self.resource.execute(Operation::DELETE, id, None, callback)
    }
}
