//! Scan report DTO

use std::path::PathBuf;
use std::time::Duration;

/// A file that could not be scanned
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a folder tree
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Folder that was walked
    pub root: PathBuf,
    /// Files with a `.gif` extension found by the walk
    pub discovered: usize,
    /// Files scanned and merged into the catalog
    pub cataloged: usize,
    /// Cataloged files whose body ended without a trailer
    pub incomplete: usize,
    /// `.gif` files that are not GIFs; skipped without reporting
    pub skipped: Vec<PathBuf>,
    /// Files that failed to scan
    pub failures: Vec<FailedFile>,
    /// Duration of the operation
    pub duration: Duration,
}

impl ScanReport {
    /// Creates an empty report for `root`
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            discovered: 0,
            cataloged: 0,
            incomplete: 0,
            skipped: Vec::new(),
            failures: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn add_failure(&mut self, path: PathBuf, reason: String) {
        self.failures.push(FailedFile { path, reason });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Scanned {} in {:.2}s: {} cataloged",
            self.root.display(),
            self.duration.as_secs_f64(),
            self.cataloged
        );

        if self.incomplete > 0 {
            summary.push_str(&format!(" ({} without trailer)", self.incomplete));
        }
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} skipped", self.skipped.len()));
        }
        if self.has_failures() {
            summary.push_str(&format!(", {} failed", self.failures.len()));
        }

        summary
    }
}
