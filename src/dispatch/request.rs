//! Request building
//!
//! Turns a resource name, verb, optional identifier and optional body into a
//! [`RequestDescriptor`]. Inputs are assumed to be validated already.

use crate::transport::{RequestDescriptor, Verb};
use serde_json::Value;

/// Compose `<resource>` or `<resource>/<id>`, percent-encoding the id
pub fn resource_uri(resource: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{}/{}", resource, urlencoding::encode(id)),
        None => resource.to_string(),
    }
}

/// Build the descriptor for one call; the body is attached verbatim
pub fn build_request(
    resource: &str,
    verb: Verb,
    id: Option<&str>,
    body: Option<Value>,
) -> RequestDescriptor {
    RequestDescriptor::new(verb, resource_uri(resource, id), body)
}
