//! Pure query helpers over record lists
//!
//! `count_matching_author` and `filter_by_title_keyword` work on arbitrary
//! JSON lists (e.g. an HTTP response body), not only on store records.

use serde_json::Value;

use crate::domain::entities::Record;
use crate::domain::validation::require_text;
use crate::error::DomainError;

fn require_array(records: &Value) -> Result<&Vec<Value>, DomainError> {
    records
        .as_array()
        .ok_or_else(|| DomainError::validation("records must be a JSON array"))
}

/// Count entries whose `username` equals `author_name`, ignoring case
pub fn count_matching_author(records: &Value, author_name: &str) -> Result<usize, DomainError> {
    let entries = require_array(records)?;
    let author = require_text(author_name, "author name")?.to_lowercase();

    Ok(entries
        .iter()
        .filter_map(|entry| entry.get("username").and_then(Value::as_str))
        .filter(|username| username.to_lowercase() == author)
        .count())
}

/// Entries whose `title` contains `keyword`, ignoring case, in their original order
pub fn filter_by_title_keyword(records: &Value, keyword: &str) -> Result<Vec<Value>, DomainError> {
    let entries = require_array(records)?;
    let keyword = require_text(keyword, "keyword")?.to_lowercase();

    Ok(entries
        .iter()
        .filter(|entry| {
            entry
                .get("title")
                .and_then(Value::as_str)
                .is_some_and(|title| title.to_lowercase().contains(&keyword))
        })
        .cloned()
        .collect())
}

/// How a name filter compares the needle with the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Prefix,
    Substring,
}

/// Keep records whose `field` matches `needle` case-insensitively
pub fn filter_by_name(records: Vec<Record>, field: &str, needle: &str, mode: NameMatch) -> Vec<Record> {
    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_lowercase)
                .is_some_and(|name| match mode {
                    NameMatch::Prefix => name.starts_with(&needle),
                    NameMatch::Substring => name.contains(&needle),
                })
        })
        .collect()
}

/// Textual form of a scalar field, as it would appear in a query string
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Keep records whose fields equal every `(field, value)` criterion
pub fn match_fields(records: Vec<Record>, criteria: &[(String, String)]) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| {
            criteria.iter().all(|(field, expected)| {
                record.get(field).and_then(field_text).as_deref() == Some(expected.as_str())
            })
        })
        .collect()
}
