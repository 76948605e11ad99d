//! Catalog persistence

mod json_catalog_store;

pub use json_catalog_store::{DEFAULT_STORE_FILE, JsonCatalogStore};
