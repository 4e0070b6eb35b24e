//! Record entity
//!
//! A record is a JSON object that always carries an integer `id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::resource::ResourceKind;
use crate::error::DomainError;

pub const ID_FIELD: &str = "id";

/// A simulated resource record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct Record {
    id: i64,
    /// Always contains `ID_FIELD` mirroring `id`
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: i64) -> Self {
        let mut fields = Map::new();
        fields.insert(ID_FIELD.to_string(), Value::from(id));
        Self { id, fields }
    }

    /// Build a record from an id and a set of fields. A field named `id` is ignored.
    pub fn with_fields(id: i64, fields: &Map<String, Value>) -> Self {
        let mut record = Self::new(id);
        record.merge(fields);
        record
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Set a field. Returns false (and does nothing) for `id`.
    pub fn set(&mut self, field: &str, value: Value) -> bool {
        if field == ID_FIELD {
            return false;
        }
        self.fields.insert(field.to_string(), value);
        true
    }

    /// Overlay fields onto the record; later values win, `id` is never replaced.
    pub fn merge(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            self.set(key, value.clone());
        }
    }

    /// True when every field of `subset` is present with an equal value
    pub fn contains_all(&self, subset: &Map<String, Value>) -> bool {
        subset
            .iter()
            .all(|(key, value)| self.fields.get(key) == Some(value))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}

impl TryFrom<Value> for Record {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(DomainError::validation("record must be a JSON object"));
        };
        let id = fields
            .get(ID_FIELD)
            .and_then(Value::as_i64)
            .ok_or_else(|| DomainError::validation("record must have an integer id"))?;
        Ok(Self { id, fields })
    }
}

/// Serialize a list of records as a JSON array
pub fn records_to_value(records: &[Record]) -> Value {
    Value::Array(records.iter().cloned().map(Record::into_value).collect())
}

/// Response of a delete operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub status: String,
    pub message: String,
}

impl DeleteReceipt {
    pub const SUCCESS: &'static str = "success";

    pub fn removed(kind: ResourceKind, id: i64) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            message: format!("{} with id {} was removed.", kind.label(), id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn new_record_has_id_field() {
        let record = Record::new(42);
        assert_eq!(record.id(), 42);
        assert_eq!(record.get("id"), Some(&json!(42)));
    }

    #[test]
    fn with_fields_never_overrides_id() {
        let record = Record::with_fields(7, &object(json!({"id": 99, "title": "x"})));
        assert_eq!(record.id(), 7);
        assert_eq!(record.into_value(), json!({"id": 7, "title": "x"}));
    }

    #[test]
    fn set_rejects_id() {
        let mut record = Record::new(1);
        assert!(!record.set("id", json!(2)));
        assert!(record.set("title", json!("Hello")));
        assert_eq!(record.id(), 1);
        assert_eq!(record.get("title"), Some(&json!("Hello")));
    }

    #[test]
    fn contains_all_checks_values() {
        let record = Record::with_fields(1, &object(json!({"title": "a", "body": "b"})));
        assert!(record.contains_all(&object(json!({"title": "a"}))));
        assert!(!record.contains_all(&object(json!({"title": "z"}))));
        assert!(!record.contains_all(&object(json!({"missing": 1}))));
    }

    #[test]
    fn try_from_requires_integer_id() {
        assert!(Record::try_from(json!({"id": 3, "name": "n"})).is_ok());
        assert!(Record::try_from(json!({"name": "n"})).is_err());
        assert!(Record::try_from(json!({"id": "3"})).is_err());
        assert!(Record::try_from(json!([1, 2])).is_err());
    }

    #[test]
    fn serializes_as_plain_object() {
        let record = Record::with_fields(5, &object(json!({"completed": false})));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 5, "completed": false}));

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn delete_receipt_message() {
        let receipt = DeleteReceipt::removed(ResourceKind::Post, 15);
        assert_eq!(receipt.status, "success");
        assert_eq!(receipt.message, "Post with id 15 was removed.");
    }
}
