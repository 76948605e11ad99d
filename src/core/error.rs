use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a GIF header from being decoded.
///
/// Anything found past the header (missing trailer, odd extensions,
/// undecodable comment bytes) is absorbed by the body scans instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Signature is not `GIF`. Callers skip these files silently.
    #[error("not a GIF file")]
    NotAGif,

    #[error("truncated header: {len} bytes, need at least 11")]
    TruncatedHeader { len: usize },
}

/// Errors from scanning a file on disk.
#[derive(Error, Debug)]
pub enum ScanFileError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl ScanFileError {
    /// True for files that should be skipped without reporting.
    pub fn is_not_a_gif(&self) -> bool {
        matches!(self, ScanFileError::Scan(ScanError::NotAGif))
    }
}
