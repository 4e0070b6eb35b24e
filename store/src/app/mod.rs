//! Application layer
//!
//! Resource services, the catalog that groups them, and pure query helpers.

pub mod catalog;
pub mod queries;
pub mod resource_service;

pub use catalog::{Catalog, DynResourceService};
pub use queries::{count_matching_author, filter_by_name, filter_by_title_keyword, match_fields, NameMatch};
pub use resource_service::ResourceService;
