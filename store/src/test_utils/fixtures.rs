//! Test fixtures
//!
//! Factory functions for valid inputs and the sample lists used by the query tests.

use serde_json::{json, Value};

/// Valid post payload
pub fn post_input() -> Value {
    json!({"title": "My post", "body": "Post content."})
}

/// Valid user payload
pub fn user_input() -> Value {
    json!({"name": "João da Silva", "email": "joao@test.com"})
}

/// Valid comment payload
pub fn comment_input() -> Value {
    json!({"body": "New test comment", "username": "Tester"})
}

/// Valid todo payload for user 10
pub fn todo_input() -> Value {
    json!({"userId": 10, "title": "Test every assertion"})
}

/// Comment list with two entries by `maria_comenta`
pub fn comment_authors() -> Value {
    json!([
        {"id": 1, "username": "maria_comenta"},
        {"id": 2, "username": "joao_silva"},
        {"id": 3, "username": "maria_comenta"},
        {"id": 4, "username": "ana_lima"},
    ])
}

/// Two titled entries, only the first mentions "hello"
pub fn titled_entries() -> Value {
    json!([
        {"title": "Hello World"},
        {"title": "Goodbye"},
    ])
}
