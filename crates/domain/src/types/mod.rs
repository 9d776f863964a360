//! Domain types and models
//!
//! Upstream entities (courses, announcements, content items, roster entries,
//! gradebook columns) are passed through as raw JSON. Only the records the
//! client reshapes itself get a dedicated type.

pub mod gradebook;
pub mod identity;

use serde_json::Value;

pub use gradebook::{filter_assignments, merge_grades, GradeEntry};
pub use identity::UserIdentity;

use crate::constants::RESULTS_KEY;

/// JSON object as returned by upstream.
pub type JsonObject = serde_json::Map<String, Value>;

/// OAuth token payload, passed through exactly as upstream returned it.
pub type TokenPayload = JsonObject;

/// Take the list stored under the upstream `results` wrapper.
///
/// A body without `results`, or with a non-array `results`, yields an empty
/// list.
pub fn unwrap_results(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut object) => match object.remove(RESULTS_KEY) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Render an id field as a string (upstream ids are strings, but numeric ids
/// are tolerated).
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
