//! Domain entities

pub mod record;
pub mod resource;
pub mod schema;

pub use record::{records_to_value, DeleteReceipt, Record, ID_FIELD};
pub use resource::{IdEnvelope, ResourceKind};
pub use schema::{OwnerLink, ResourceSchema};
