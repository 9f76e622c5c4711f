//! Argument validation
//!
//! Pure checks run before a request is built. The first missing argument
//! decides the message; identifiers are checked before payloads.

use crate::error::ValidationError;
use serde_json::Value;

/// Message for a missing resource identifier
pub const ID_REQUIRED: &str = "id is required";

/// Message for an identifier that would act as a relative path segment
pub const ID_INVALID: &str = "id is invalid";

/// Check that an identifier was supplied and is not empty.
///
/// `.` and `..` are refused: URL resolution treats them (and their
/// percent-encoded forms) as path navigation whatever the escaping.
pub fn require_id(id: Option<&str>) -> Result<&str, ValidationError> {
    match id {
        Some("." | "..") => Err(ValidationError::new(ID_INVALID)),
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ValidationError::new(ID_REQUIRED)),
    }
}

/// JSON values that count as "not supplied": `null`, `false`, `0` and `""`
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Check that a payload was supplied and is not falsy
pub fn require_payload(payload: Option<Value>, label: &str) -> Result<Value, ValidationError> {
    match payload {
        Some(payload) if !is_falsy(&payload) => Ok(payload),
        _ => Err(ValidationError::new(format!(
            "{} object is required",
            label
        ))),
    }
}
