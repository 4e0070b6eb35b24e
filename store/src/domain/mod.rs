//! Domain layer
//!
//! Contains the record model and validation rules with no I/O.
//! - `entities`: Records, resource kinds and schemas
//! - `ports`: Trait definitions for stores and identifier sources
//! - `validation`: Argument checks shared by every store

pub mod entities;
pub mod ports;
pub mod validation;
