//! Argument validation shared by every store
//!
//! Identifier arguments arrive as raw JSON so that "missing" and "not numeric"
//! stay distinguishable from a valid id.

use serde_json::{Map, Value};

use super::entities::ResourceKind;
use crate::error::DomainError;

/// Interpret a JSON value as an identifier.
///
/// Accepts non-zero integers and strings holding a non-zero integer.
pub fn parse_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (id != 0).then_some(id)
}

/// Parse an identifier of the given kind, failing with `invalid <kind> id`
pub fn require_id(value: &Value, kind: ResourceKind) -> Result<i64, DomainError> {
    parse_id(value).ok_or_else(|| DomainError::validation(format!("invalid {} id", kind)))
}

/// A field is missing when absent, null, or an empty string
pub fn is_missing(fields: &Map<String, Value>, field: &str) -> bool {
    match fields.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// First required field that is missing, if any
pub fn first_missing<'a>(fields: &Map<String, Value>, required: &[&'a str]) -> Option<&'a str> {
    required
        .iter()
        .copied()
        .find(|field| is_missing(fields, field))
}

/// Reject empty text arguments
pub fn require_text<'a>(text: &'a str, what: &str) -> Result<&'a str, DomainError> {
    if text.is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", what)));
    }
    Ok(text)
}
