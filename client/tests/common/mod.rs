//! Shared helpers for the client integration tests

use serde_json::{json, Value};

/// Valid payload for a new post
pub fn sample_post(user_id: i64) -> Value {
    json!({
        "userId": user_id,
        "title": "New API test post",
        "body": "Test content."
    })
}
