//! Application layer
//!
//! Use cases that drive the scanner and the catalog store.

mod catalog_queries;
pub mod dto;
mod edit_entry;
mod scan_file;
mod scan_folder;

pub use catalog_queries::{FolderTree, group_by_folder, search};
pub use edit_entry::set_field;
pub use scan_file::{ScannedFile, scan_file};
pub use scan_folder::{ProgressCallback, ScanFolderUseCase, catalog_key};
