//! FakeAPI store
//!
//! In-memory mock resource store for posts, users, comments and todos, with
//! a JSONPlaceholder-compatible HTTP front end.
//! Uses hexagonal (ports & adapters) architecture: the domain defines the
//! `ResourceStore` and `IdSource` ports, adapters implement them.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;

pub use app::{Catalog, ResourceService};
pub use config::Config;
pub use domain::entities::{DeleteReceipt, Record, ResourceKind};
pub use error::{AppError, DomainError};
pub use handlers::router;
