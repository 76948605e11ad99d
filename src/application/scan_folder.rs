//! Scan folder use case
//!
//! Walks a folder tree, scans every `.gif` file and merges the results into
//! a catalog.

use super::scan_file::{ScannedFile, scan_file};
use crate::application::dto::{ScanOptions, ScanReport};
use crate::core::error::ScanFileError;
use crate::core::io::has_gif_extension;
use crate::domain::entities::Catalog;
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Progress callback, called with (files done, files total).
/// May run on worker threads.
pub type ProgressCallback<'a> = &'a (dyn Fn(usize, usize) + Sync);

/// Scan folder use case
///
/// Each file is scanned independently; a file that fails never stops the
/// rest of the batch.
pub struct ScanFolderUseCase {
    options: ScanOptions,
}

impl ScanFolderUseCase {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Lists `.gif` files under `root`, sorted by path.
    ///
    /// Symlinked files are included; symlinked directories are not followed.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            bail!("Not a directory: {}", root.display());
        }

        let mut files = Vec::new();
        let mut pending = vec![(root.to_path_buf(), 0usize)];

        while let Some((dir, depth)) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) if dir == root => {
                    return Err(e).context(format!("Failed to read {}", root.display()));
                }
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };

                if file_type.is_dir() {
                    if self.options.max_depth.is_none_or(|max| depth < max) {
                        pending.push((path, depth + 1));
                    }
                } else if has_gif_extension(&path)
                    && (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
                {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Scans every GIF under `root` into `catalog`.
    ///
    /// Entries already stored under the same path are replaced.
    pub fn execute(
        &self,
        root: &Path,
        catalog: &mut Catalog,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<ScanReport> {
        let start_time = Instant::now();
        let files = self.discover(root)?;
        let total = files.len();

        tracing::info!(root = %root.display(), files = total, "starting folder scan");

        let done = AtomicUsize::new(0);
        let scan_one = |path: &PathBuf| {
            let outcome = scan_file(path);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = progress {
                callback(finished, total);
            }
            (path.clone(), outcome)
        };

        let outcomes: Vec<(PathBuf, Result<ScannedFile, ScanFileError>)> = if self.options.parallel
        {
            files.par_iter().map(scan_one).collect()
        } else {
            files.iter().map(scan_one).collect()
        };

        let mut report = ScanReport::new(root.to_path_buf());
        report.discovered = total;

        for (path, outcome) in outcomes {
            match outcome {
                Ok(scanned) => {
                    if !scanned.body.is_complete() {
                        report.incomplete += 1;
                    }
                    catalog.insert(catalog_key(&path), scanned.entry);
                    report.cataloged += 1;
                }
                Err(e) if e.is_not_a_gif() => {
                    tracing::debug!(path = %path.display(), "not a GIF, skipped");
                    report.skipped.push(path);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to scan");
                    report.add_failure(path, e.to_string());
                }
            }
        }

        report.duration = start_time.elapsed();

        tracing::info!(
            cataloged = report.cataloged,
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "folder scan complete in {:.2}s",
            report.duration.as_secs_f64()
        );

        Ok(report)
    }
}

impl Default for ScanFolderUseCase {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

/// Catalog key for a scanned file: its path as walked, lossily as text.
pub fn catalog_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
