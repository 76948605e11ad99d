//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.

mod catalog_repository;

pub use catalog_repository::{CatalogError, CatalogRepository};
