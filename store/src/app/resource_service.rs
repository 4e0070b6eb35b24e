//! Resource service
//!
//! Per-kind facade over a `ResourceStore`. Adds the owner, text, completion
//! and name operations on top of plain CRUD and logs every mutation.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::queries::{filter_by_name, match_fields, NameMatch};
use crate::domain::entities::{DeleteReceipt, Record, ResourceKind, ResourceSchema};
use crate::domain::ports::ResourceStore;
use crate::domain::validation::{require_id, require_text};
use crate::error::DomainError;

pub struct ResourceService<S: ResourceStore + ?Sized> {
    store: Arc<S>,
}

impl<S: ResourceStore + ?Sized> Clone for ResourceService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ResourceStore + ?Sized> ResourceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn kind(&self) -> ResourceKind {
        self.store.kind()
    }

    pub fn schema(&self) -> &ResourceSchema {
        self.store.schema()
    }

    pub fn create(&self, input: &Value) -> Result<Record, DomainError> {
        let record = self.store.create(input)?;
        tracing::debug!(kind = %self.kind(), id = record.id(), "Created record");
        Ok(record)
    }

    /// Create a record attached to `owner_id`; the owner argument wins over the input
    pub fn create_for_owner(&self, owner_id: impl Into<Value>, input: &Value) -> Result<Record, DomainError> {
        let (owner, owner_id) = self.schema().require_owner(&owner_id.into())?;

        let mut input = input.clone();
        if let Some(fields) = input.as_object_mut() {
            fields.insert(owner.field.to_string(), Value::from(owner_id));
        }
        self.create(&input)
    }

    pub fn get_by_id(&self, id: impl Into<Value>) -> Result<Record, DomainError> {
        self.store.get_by_id(&id.into())
    }

    pub fn list_all(&self) -> Result<Vec<Record>, DomainError> {
        self.store.list_all()
    }

    pub fn list_by_owner(&self, owner_id: impl Into<Value>) -> Result<Vec<Record>, DomainError> {
        self.store.list_by_owner(&owner_id.into())
    }

    pub fn update(&self, id: impl Into<Value>, patch: &Value) -> Result<Record, DomainError> {
        let record = self.store.update(&id.into(), patch)?;
        tracing::debug!(kind = %self.kind(), id = record.id(), "Updated record");
        Ok(record)
    }

    /// Point a record at another owner
    pub fn assign_owner(&self, id: impl Into<Value>, owner_id: impl Into<Value>) -> Result<Record, DomainError> {
        let id = id.into();
        require_id(&id, self.kind())?;
        let (owner, owner_id) = self.schema().require_owner(&owner_id.into())?;

        let mut patch = Map::new();
        patch.insert(owner.field.to_string(), Value::from(owner_id));
        self.update(id, &Value::Object(patch))
    }

    pub fn update_text(&self, id: impl Into<Value>, text: &str) -> Result<Record, DomainError> {
        let field = self.schema().text_field.ok_or_else(|| self.lacks("text field"))?;
        let text = require_text(text, "text")?;

        let mut patch = Map::new();
        patch.insert(field.to_string(), Value::from(text));
        self.update(id, &Value::Object(patch))
    }

    pub fn mark_completed(&self, id: impl Into<Value>) -> Result<Record, DomainError> {
        let field = self
            .schema()
            .completion_field
            .ok_or_else(|| self.lacks("completion flag"))?;

        let mut patch = Map::new();
        patch.insert(field.to_string(), Value::Bool(true));
        self.update(id, &Value::Object(patch))
    }

    pub fn delete(&self, id: impl Into<Value>) -> Result<DeleteReceipt, DomainError> {
        let receipt = self.store.delete(&id.into())?;
        tracing::debug!(kind = %self.kind(), message = %receipt.message, "Deleted record");
        Ok(receipt)
    }

    /// Records whose name starts with `name`, ignoring case
    pub fn filter_by_name_prefix(&self, name: &str) -> Result<Vec<Record>, DomainError> {
        self.filter_by_name(name, NameMatch::Prefix)
    }

    /// Records whose name contains `name`, ignoring case
    pub fn filter_by_name_substring(&self, name: &str) -> Result<Vec<Record>, DomainError> {
        self.filter_by_name(name, NameMatch::Substring)
    }

    fn filter_by_name(&self, name: &str, mode: NameMatch) -> Result<Vec<Record>, DomainError> {
        let field = self.schema().name_field.ok_or_else(|| self.lacks("name field"))?;
        let name = require_text(name, "name")?;
        Ok(filter_by_name(self.list_all()?, field, name, mode))
    }

    /// List with field-equality criteria.
    ///
    /// A criterion on the owner field turns the listing into `list_by_owner`;
    /// the remaining pairs filter the result.
    pub fn query(&self, criteria: &[(String, String)]) -> Result<Vec<Record>, DomainError> {
        let owner_field = self.schema().owner.map(|owner| owner.field);
        let is_owner = |field: &str| Some(field) == owner_field;

        let records = match criteria.iter().find(|(field, _)| is_owner(field.as_str())) {
            Some((_, owner_id)) => self.list_by_owner(owner_id.as_str())?,
            None => self.list_all()?,
        };
        let rest: Vec<(String, String)> = criteria
            .iter()
            .filter(|(field, _)| !is_owner(field.as_str()))
            .cloned()
            .collect();
        Ok(match_fields(records, &rest))
    }

    fn lacks(&self, what: &str) -> DomainError {
        DomainError::validation(format!("{} records have no {}", self.kind(), what))
    }
}
