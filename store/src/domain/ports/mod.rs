//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod ids;
pub mod store;

pub use ids::IdSource;
pub use store::ResourceStore;
