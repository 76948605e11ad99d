use super::error::ScanFileError;
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filesystem timestamps in local time, formatted with [`TIMESTAMP_FORMAT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTimestamps {
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl FileTimestamps {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            created: metadata.created().ok().map(format_timestamp),
            modified: metadata.modified().ok().map(format_timestamp),
        }
    }
}

pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Reads a whole file along with its timestamps.
pub fn read_with_timestamps(path: &Path) -> Result<(Vec<u8>, FileTimestamps), ScanFileError> {
    let wrap = |source: std::io::Error| ScanFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let data = fs::read(path).map_err(wrap)?;
    let timestamps = fs::metadata(path)
        .map(|m| FileTimestamps::from_metadata(&m))
        .map_err(wrap)?;

    Ok((data, timestamps))
}

/// Case-insensitive `.gif` extension check.
pub fn has_gif_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}
