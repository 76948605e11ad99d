//! Scan file use case
//!
//! Reads one file, runs the GIF scanner on it and merges its timestamps.

use crate::core::error::ScanFileError;
use crate::core::io::read_with_timestamps;
use crate::domain::entities::CatalogEntry;
use crate::formats::gif;
use crate::types::BodyScanReport;
use std::path::Path;

/// One successfully scanned file
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub entry: CatalogEntry,
    /// How far the body passes got; not persisted
    pub body: BodyScanReport,
}

/// Scans one file into a catalog entry
pub fn scan_file(path: &Path) -> Result<ScannedFile, ScanFileError> {
    let (data, timestamps) = read_with_timestamps(path)?;
    let metadata = gif::scan(&data)?;
    let body = metadata.body;

    if !body.is_complete() {
        tracing::debug!(
            path = %path.display(),
            images = ?body.images,
            comments = ?body.comments,
            "body scan ended without a trailer"
        );
    }

    Ok(ScannedFile {
        entry: CatalogEntry::from_scan(metadata, timestamps),
        body,
    })
}
