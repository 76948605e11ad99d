//! Scan options DTO

/// Options for scanning a folder tree
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Scan files on the rayon pool instead of one at a time
    pub parallel: bool,
    /// Deepest directory level to descend into (root is 0, `None` = no limit)
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_depth: None,
        }
    }
}

impl ScanOptions {
    /// Scans one file at a time
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Limits how deep the walk descends
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
