//! In-memory resource stores
//!
//! - `stateless`: canned responses, nothing persisted
//! - `table`: keyed table with real merge and removal

pub mod stateless;
pub mod table;

pub use stateless::MockResourceStore;
pub use table::InMemoryResourceStore;
