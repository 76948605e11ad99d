//! Shared errors and file access used by every layer.

pub mod error;
pub mod io;
