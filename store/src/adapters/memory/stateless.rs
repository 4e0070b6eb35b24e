//! Stateless mock store
//!
//! Nothing is stored. Reads return canned records shaped for the kind,
//! updates echo the patch and deletes always succeed. Only `create` is
//! non-deterministic, through the injected `IdSource`.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{DeleteReceipt, Record, ResourceKind, ResourceSchema};
use crate::domain::ports::{IdSource, ResourceStore};
use crate::domain::validation::require_id;
use crate::error::DomainError;

pub struct MockResourceStore {
    schema: ResourceSchema,
    ids: Arc<dyn IdSource>,
}

impl MockResourceStore {
    pub fn new(schema: ResourceSchema, ids: Arc<dyn IdSource>) -> Self {
        Self { schema, ids }
    }

    pub fn for_kind(kind: ResourceKind, ids: Arc<dyn IdSource>) -> Self {
        Self::new(ResourceSchema::for_kind(kind), ids)
    }
}

impl ResourceStore for MockResourceStore {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn create(&self, input: &Value) -> Result<Record, DomainError> {
        let fields = self.schema.validate_input(input)?;
        let id = self.ids.next_id(self.schema.envelope);
        Ok(self.schema.assemble(id, fields))
    }

    fn get_by_id(&self, id: &Value) -> Result<Record, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        Ok(self.schema.canned(id))
    }

    fn list_all(&self) -> Result<Vec<Record>, DomainError> {
        Ok(self.schema.canned_all())
    }

    fn list_by_owner(&self, owner_id: &Value) -> Result<Vec<Record>, DomainError> {
        let (_, owner_id) = self.schema.require_owner(owner_id)?;
        Ok(self.schema.canned_for_owner(owner_id))
    }

    fn update(&self, id: &Value, patch: &Value) -> Result<Record, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        let fields = self.schema.validate_patch(patch)?;
        Ok(Record::with_fields(id, fields))
    }

    fn delete(&self, id: &Value) -> Result<DeleteReceipt, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        Ok(DeleteReceipt::removed(self.schema.kind, id))
    }
}
