//! Adapters layer
//!
//! Implementations of port traits.

pub mod ids;
pub mod memory;

pub use ids::{RandomIdSource, SequenceIdSource};
pub use memory::{InMemoryResourceStore, MockResourceStore};
