//! Resource store port
//!
//! Identifier and payload arguments are raw JSON values. Every operation
//! validates them and fails with `DomainError::Validation` on bad input.

use serde_json::Value;

use crate::domain::entities::{DeleteReceipt, Record, ResourceKind, ResourceSchema};
use crate::error::DomainError;

/// CRUD over one resource kind
pub trait ResourceStore: Send + Sync {
    fn schema(&self) -> &ResourceSchema;

    fn kind(&self) -> ResourceKind {
        self.schema().kind
    }

    /// Create a record from an input object
    fn create(&self, input: &Value) -> Result<Record, DomainError>;

    /// Get a record by id
    fn get_by_id(&self, id: &Value) -> Result<Record, DomainError>;

    /// List every record
    fn list_all(&self) -> Result<Vec<Record>, DomainError>;

    /// List records belonging to an owner (`userId` / `postId`)
    fn list_by_owner(&self, owner_id: &Value) -> Result<Vec<Record>, DomainError>;

    /// Apply a patch to a record
    fn update(&self, id: &Value, patch: &Value) -> Result<Record, DomainError>;

    /// Delete a record
    fn delete(&self, id: &Value) -> Result<DeleteReceipt, DomainError>;
}
