//! Resource schemas
//!
//! One schema per resource kind: required fields, identifier envelope,
//! defaults, owner link and the canned data returned by the stateless store.

use serde_json::{json, Map, Value};

use super::record::Record;
use super::resource::{IdEnvelope, ResourceKind};
use crate::domain::validation::{first_missing, require_id};
use crate::error::DomainError;

/// Field tying a record to a record of another kind (`userId`, `postId`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerLink {
    pub field: &'static str,
    pub kind: ResourceKind,
}

#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    pub required: Vec<&'static str>,
    pub envelope: IdEnvelope,
    pub defaults: Map<String, Value>,
    pub owner: Option<OwnerLink>,
    /// Free-text field edited by `update_text`
    pub text_field: Option<&'static str>,
    /// Boolean flag set by `mark_completed`
    pub completion_field: Option<&'static str>,
    /// Field searched by the name filters
    pub name_field: Option<&'static str>,
    template: Map<String, Value>,
    owned: Vec<Record>,
    all: Vec<Record>,
}

impl ResourceSchema {
    pub fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Post => Self::post(),
            ResourceKind::User => Self::user(),
            ResourceKind::Comment => Self::comment(),
            ResourceKind::Todo => Self::todo(),
        }
    }

    fn post() -> Self {
        Self {
            kind: ResourceKind::Post,
            required: vec!["title", "body"],
            envelope: IdEnvelope::new(101, 200),
            defaults: Map::new(),
            owner: Some(OwnerLink {
                field: "userId",
                kind: ResourceKind::User,
            }),
            text_field: Some("body"),
            completion_field: None,
            name_field: None,
            template: object(json!({
                "userId": 1,
                "title": "Sample post",
                "body": "Content of the sample post."
            })),
            owned: records(vec![
                (1, json!({"userId": 1, "title": "First post", "body": "Hello from the first post."})),
                (2, json!({"userId": 1, "title": "Second post", "body": "Hello from the second post."})),
            ]),
            all: records(vec![
                (1, json!({"userId": 1, "title": "First post", "body": "Hello from the first post."})),
                (2, json!({"userId": 1, "title": "Second post", "body": "Hello from the second post."})),
                (3, json!({"userId": 1, "title": "Third post", "body": "Hello from the third post."})),
            ]),
        }
    }

    fn user() -> Self {
        Self {
            kind: ResourceKind::User,
            required: vec!["name", "email"],
            envelope: IdEnvelope::new(11, 20),
            defaults: Map::new(),
            owner: None,
            text_field: None,
            completion_field: None,
            name_field: Some("name"),
            template: object(json!({
                "name": "Sample User",
                "email": "sample.user@example.com"
            })),
            owned: Vec::new(),
            all: records(vec![
                (1, json!({"name": "Leanne Graham", "email": "Sincere@april.biz"})),
                (2, json!({"name": "Ervin Howell", "email": "Shanna@melissa.tv"})),
                (3, json!({"name": "Clementine Bauch", "email": "Nathan@yesenia.net"})),
            ]),
        }
    }

    fn comment() -> Self {
        Self {
            kind: ResourceKind::Comment,
            required: vec!["body"],
            envelope: IdEnvelope::new(501, 1500),
            defaults: Map::new(),
            owner: Some(OwnerLink {
                field: "postId",
                kind: ResourceKind::Post,
            }),
            text_field: Some("body"),
            completion_field: None,
            name_field: None,
            template: object(json!({
                "postId": 1,
                "username": "maria_comenta",
                "body": "Sample comment."
            })),
            owned: records(vec![
                (1, json!({"postId": 1, "username": "maria_comenta", "body": "Great post!"})),
                (2, json!({"postId": 1, "username": "joao_silva", "body": "Thanks for sharing."})),
            ]),
            all: records(vec![
                (1, json!({"postId": 1, "username": "maria_comenta", "body": "Great post!"})),
                (2, json!({"postId": 1, "username": "joao_silva", "body": "Thanks for sharing."})),
                (3, json!({"postId": 2, "username": "maria_comenta", "body": "Me again."})),
                (4, json!({"postId": 2, "username": "ana_lima", "body": "Interesting."})),
            ]),
        }
    }

    fn todo() -> Self {
        Self {
            kind: ResourceKind::Todo,
            required: vec!["userId", "title"],
            envelope: IdEnvelope::new(201, 300),
            defaults: object(json!({"completed": false})),
            owner: Some(OwnerLink {
                field: "userId",
                kind: ResourceKind::User,
            }),
            text_field: None,
            completion_field: Some("completed"),
            name_field: None,
            template: object(json!({
                "userId": 1,
                "title": "Sample task",
                "completed": false
            })),
            owned: records(vec![
                (1, json!({"userId": 1, "title": "Write the tests", "completed": false})),
                (2, json!({"userId": 1, "title": "Review the pull request", "completed": true})),
                (3, json!({"userId": 1, "title": "Deploy the service", "completed": false})),
            ]),
            all: records(vec![
                (1, json!({"userId": 1, "title": "Write the tests", "completed": false})),
                (2, json!({"userId": 1, "title": "Review the pull request", "completed": true})),
                (3, json!({"userId": 2, "title": "Deploy the service", "completed": false})),
            ]),
        }
    }

    /// Canned single record with the given id substituted
    pub fn canned(&self, id: i64) -> Record {
        Record::with_fields(id, &self.template)
    }

    /// Canned owner list with the owner id substituted into every element
    pub fn canned_for_owner(&self, owner_id: i64) -> Vec<Record> {
        let Some(owner) = self.owner else {
            return Vec::new();
        };
        self.owned
            .iter()
            .cloned()
            .map(|mut record| {
                record.set(owner.field, Value::from(owner_id));
                record
            })
            .collect()
    }

    /// Canned "all" list
    pub fn canned_all(&self) -> Vec<Record> {
        self.all.clone()
    }

    /// Check a create payload: must be an object with every required field present
    pub fn validate_input<'a>(&self, input: &'a Value) -> Result<&'a Map<String, Value>, DomainError> {
        let Some(fields) = input.as_object() else {
            return Err(DomainError::validation(format!(
                "invalid data to create {}: expected a JSON object",
                self.kind
            )));
        };
        if let Some(field) = first_missing(fields, &self.required) {
            return Err(DomainError::validation(format!(
                "invalid data to create {}: missing {}",
                self.kind, field
            )));
        }
        Ok(fields)
    }

    /// Check an update payload: must be present and an object
    pub fn validate_patch<'a>(&self, patch: &'a Value) -> Result<&'a Map<String, Value>, DomainError> {
        patch.as_object().ok_or_else(|| {
            DomainError::validation(format!(
                "invalid update for {}: expected a JSON object",
                self.kind
            ))
        })
    }

    /// Owner link plus the parsed owner id
    pub fn require_owner(&self, owner_id: &Value) -> Result<(OwnerLink, i64), DomainError> {
        let owner = self.owner.ok_or_else(|| {
            DomainError::validation(format!("{} records have no owner link", self.kind))
        })?;
        let id = require_id(owner_id, owner.kind)?;
        Ok((owner, id))
    }

    /// `{id} ∪ defaults ∪ input`
    pub fn assemble(&self, id: i64, input: &Map<String, Value>) -> Record {
        let mut record = Record::with_fields(id, &self.defaults);
        record.merge(input);
        record
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn records(entries: Vec<(i64, Value)>) -> Vec<Record> {
    entries
        .into_iter()
        .map(|(id, fields)| Record::with_fields(id, &object(fields)))
        .collect()
}
