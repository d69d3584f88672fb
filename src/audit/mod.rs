//! Rule catalog and audit engine.

pub mod catalog;
pub mod engine;
pub mod rules;

pub use catalog::{Catalog, CatalogError, Rule};
pub use engine::{AuditEngine, AuditOptions};
