//! Catalog repository trait
//!
//! Defines how the catalog is loaded and persisted. The scanner never sees
//! this; records are passed by value from the use cases.

use crate::domain::entities::Catalog;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or saving the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for persisting the whole catalog
///
/// The catalog is stored as one unit and rewritten in full on every save.
///
/// # Example
///
/// ```ignore
/// let store = JsonCatalogStore::new("gif_catalog.json");
/// let mut catalog = store.load()?;
/// catalog.insert(path, entry);
/// store.save(&catalog)?;
/// ```
pub trait CatalogRepository: Send + Sync {
    /// Loads the catalog; a store that does not exist yet loads empty
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Replaces the stored catalog
    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError>;

    /// Where the catalog lives
    fn location(&self) -> &Path;

    /// Whether anything has been saved yet
    fn exists(&self) -> bool {
        self.location().exists()
    }
}
