//! Stateful in-memory store
//!
//! Records live in a keyed table, so updates merge and deletes are visible
//! to later reads.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::domain::entities::{DeleteReceipt, Record, ResourceKind, ResourceSchema};
use crate::domain::ports::{IdSource, ResourceStore};
use crate::domain::validation::{parse_id, require_id};
use crate::error::DomainError;

pub struct InMemoryResourceStore {
    schema: ResourceSchema,
    ids: Arc<dyn IdSource>,
    records: RwLock<BTreeMap<i64, Record>>,
}

impl InMemoryResourceStore {
    /// Empty table
    pub fn new(schema: ResourceSchema, ids: Arc<dyn IdSource>) -> Self {
        Self {
            schema,
            ids,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Table pre-populated with the kind's canned records
    pub fn seeded(kind: ResourceKind, ids: Arc<dyn IdSource>) -> Self {
        let store = Self::new(ResourceSchema::for_kind(kind), ids);
        let seed = store.schema.canned_all();
        store.with_records(seed)
    }

    /// Pre-populate with records
    pub fn with_records(self, records: impl IntoIterator<Item = Record>) -> Self {
        {
            let mut table = self.write();
            for record in records {
                table.insert(record.id(), record);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every write leaves the map consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<i64, Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(&self, id: i64) -> DomainError {
        DomainError::NotFound(format!("{} with id {} not found", self.schema.kind.label(), id))
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn create(&self, input: &Value) -> Result<Record, DomainError> {
        let fields = self.schema.validate_input(input)?;
        let envelope = self.schema.envelope;

        let mut table = self.write();
        // Fall back to a scan when every draw hit a taken id
        let id = (0..envelope.len())
            .map(|_| self.ids.next_id(envelope))
            .find(|id| !table.contains_key(id))
            .or_else(|| (envelope.start()..=envelope.end()).find(|id| !table.contains_key(id)))
            .ok_or_else(|| {
                DomainError::Conflict(format!(
                    "identifier envelope {} exhausted for {}",
                    envelope, self.schema.kind
                ))
            })?;

        let record = self.schema.assemble(id, fields);
        table.insert(id, record.clone());
        Ok(record)
    }

    fn get_by_id(&self, id: &Value) -> Result<Record, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        self.read().get(&id).cloned().ok_or_else(|| self.not_found(id))
    }

    fn list_all(&self) -> Result<Vec<Record>, DomainError> {
        Ok(self.read().values().cloned().collect())
    }

    fn list_by_owner(&self, owner_id: &Value) -> Result<Vec<Record>, DomainError> {
        let (owner, owner_id) = self.schema.require_owner(owner_id)?;
        Ok(self
            .read()
            .values()
            .filter(|record| record.get(owner.field).and_then(parse_id) == Some(owner_id))
            .cloned()
            .collect())
    }

    fn update(&self, id: &Value, patch: &Value) -> Result<Record, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        let fields = self.schema.validate_patch(patch)?;

        let mut table = self.write();
        let record = table.get_mut(&id).ok_or_else(|| self.not_found(id))?;
        record.merge(fields);
        Ok(record.clone())
    }

    fn delete(&self, id: &Value) -> Result<DeleteReceipt, DomainError> {
        let id = require_id(id, self.schema.kind)?;
        self.write().remove(&id).ok_or_else(|| self.not_found(id))?;
        Ok(DeleteReceipt::removed(self.schema.kind, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RandomIdSource, SequenceIdSource};
    use crate::domain::entities::IdEnvelope;
    use crate::test_utils::{post_input, todo_input, user_input, FixedIdSource};
    use serde_json::json;

    fn seeded(kind: ResourceKind) -> InMemoryResourceStore {
        InMemoryResourceStore::seeded(kind, Arc::new(SequenceIdSource::new()))
    }

    #[test]
    fn seeded_store_lists_canned_records() {
        let store = seeded(ResourceKind::User);
        assert_eq!(store.len(), 3);
        let names: Vec<_> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|u| u.get("name").cloned())
            .collect();
        assert_eq!(names[0], Some(json!("Leanne Graham")));
    }

    #[test]
    fn create_then_get() {
        let store = seeded(ResourceKind::Post);
        let created = store.create(&post_input()).unwrap();
        assert_eq!(created.id(), 101);

        let fetched = store.get_by_id(&json!(101)).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn create_skips_taken_ids() {
        let store = InMemoryResourceStore::new(
            ResourceSchema::for_kind(ResourceKind::Post),
            Arc::new(SequenceIdSource::new()),
        )
        .with_records([Record::new(101), Record::new(102)]);

        let created = store.create(&post_input()).unwrap();
        assert_eq!(created.id(), 103);
    }

    #[test]
    fn create_fails_when_envelope_exhausted() {
        let mut schema = ResourceSchema::for_kind(ResourceKind::User);
        schema.envelope = IdEnvelope::new(11, 11);
        let store = InMemoryResourceStore::new(schema, Arc::new(FixedIdSource(11)));

        store
            .create(&json!({"name": "Ana", "email": "ana@example.com"}))
            .unwrap();
        let err = store
            .create(&json!({"name": "Bia", "email": "bia@example.com"}))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn random_ids_fill_the_whole_envelope() {
        for _ in 0..50 {
            let store = InMemoryResourceStore::seeded(ResourceKind::User, Arc::new(RandomIdSource));
            let mut ids: Vec<i64> = (0..10)
                .map(|_| store.create(&user_input()).unwrap().id())
                .collect();
            ids.sort_unstable();
            assert_eq!(ids, (11..=20).collect::<Vec<_>>());

            assert!(matches!(
                store.create(&user_input()),
                Err(DomainError::Conflict(_))
            ));
        }
    }

    #[test]
    fn create_validates_like_stateless() {
        let store = seeded(ResourceKind::Todo);
        let err = store.create(&json!({"userId": 10})).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("invalid data to create todo: missing title")
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = seeded(ResourceKind::Post);
        assert!(matches!(
            store.get_by_id(&json!(9999)),
            Err(DomainError::NotFound(_))
        ));
        assert!(store.get_by_id(&json!("x")).unwrap_err().is_validation());
    }

    #[test]
    fn update_merges_into_stored_record() {
        let store = seeded(ResourceKind::User);
        let updated = store.update(&json!(1), &json!({"name": "Leanne G."})).unwrap();
        assert_eq!(
            updated.into_value(),
            json!({"id": 1, "name": "Leanne G.", "email": "Sincere@april.biz"})
        );
        assert_eq!(
            store.get_by_id(&json!(1)).unwrap().get("name"),
            Some(&json!("Leanne G."))
        );
    }

    #[test]
    fn update_keeps_id() {
        let store = seeded(ResourceKind::User);
        let updated = store.update(&json!(2), &json!({"id": 77})).unwrap();
        assert_eq!(updated.id(), 2);
    }

    #[test]
    fn update_unknown_is_not_found() {
        let store = seeded(ResourceKind::User);
        assert!(matches!(
            store.update(&json!(9999), &json!({"name": "x"})),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_record() {
        let store = seeded(ResourceKind::Post);
        let receipt = store.delete(&json!(2)).unwrap();
        assert_eq!(receipt.message, "Post with id 2 was removed.");
        assert!(matches!(
            store.get_by_id(&json!(2)),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(store.delete(&json!(2)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn list_by_owner_filters_stored_records() {
        let store = seeded(ResourceKind::Todo);
        store.create(&todo_input()).unwrap();

        let for_user_one = store.list_by_owner(&json!(1)).unwrap();
        assert_eq!(for_user_one.len(), 2);

        let for_user_ten = store.list_by_owner(&json!("10")).unwrap();
        assert_eq!(for_user_ten.len(), 1);

        assert!(store.list_by_owner(&json!(404)).unwrap().is_empty());
    }
}
