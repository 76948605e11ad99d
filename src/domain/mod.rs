//! Domain layer
//!
//! Catalog entities and the repository trait the store implements.
//! Nothing here touches the filesystem.

pub mod entities;
pub mod repositories;
