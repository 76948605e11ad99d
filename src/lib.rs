pub mod application;
pub mod core;
pub mod domain;
pub mod formats;
pub mod infrastructure;
pub mod presentation;
pub mod types;

pub use crate::core::error::{ScanError, ScanFileError};
pub use formats::gif::scan;
pub use types::{BodyEnd, BodyScanReport, GifMetadata};
