//! JSON catalog store
//!
//! Keeps the whole catalog in one pretty-printed JSON object keyed by path.

use crate::domain::entities::Catalog;
use crate::domain::repositories::{CatalogError, CatalogRepository};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "gif_catalog.json";

const INDENT: &[u8] = b"    ";

/// Catalog stored as a single JSON file
///
/// Saves go through a sibling temporary file renamed over the store, so a
/// failed write leaves the previous catalog intact.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_to(&self, target: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
        let file = File::create(target).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        let mut serializer =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        catalog
            .serialize(&mut serializer)
            .map_err(|source| CatalogError::Json {
                path: self.path.clone(),
                source,
            })?;

        writer.flush().map_err(|e| self.io_error(e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl Default for JsonCatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl CatalogRepository for JsonCatalogStore {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no catalog yet, starting empty");
                return Ok(Catalog::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let catalog: Catalog =
            serde_json::from_str(&text).map_err(|source| CatalogError::Json {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        if let Err(e) = self.write_to(&temp, catalog) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            entries = catalog.len(),
            "saved catalog"
        );
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_file_sits_next_to_store() {
        let store = JsonCatalogStore::new("/data/cat.json");
        assert_eq!(store.temp_path(), PathBuf::from("/data/cat.json.tmp"));
    }

    #[test]
    fn default_location() {
        let store = JsonCatalogStore::default();
        assert_eq!(store.location(), Path::new(DEFAULT_STORE_FILE));
    }
}
