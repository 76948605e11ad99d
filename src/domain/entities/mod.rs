//! Domain entities
//!
//! The records the catalog stores and edits.

mod catalog_entry;

pub use catalog_entry::{
    COMPRESSION, Catalog, CatalogEntry, EditError, Field, NUMBER_FORMAT,
};
