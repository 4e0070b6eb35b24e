//! Identifier source port

use crate::domain::entities::IdEnvelope;

/// Supplies identifiers for newly created records
pub trait IdSource: Send + Sync {
    /// Next identifier; implementations must stay inside `envelope`
    fn next_id(&self, envelope: IdEnvelope) -> i64;
}
