//! Read-only queries over a catalog

use crate::domain::entities::{Catalog, CatalogEntry};
use std::collections::BTreeMap;
use std::path::Path;

/// Files grouped by their parent folder, both levels sorted
pub type FolderTree = BTreeMap<String, Vec<String>>;

/// Entries whose path or any field value contains `query`, ignoring case.
///
/// An empty query matches nothing. Results are ordered by path.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a str, &'a CatalogEntry)> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|(path, entry)| path.to_lowercase().contains(&needle) || entry.matches(&needle))
        .map(|(path, entry)| (path.as_str(), entry))
        .collect()
}

/// Groups catalog paths by parent folder.
pub fn group_by_folder<'a, I>(paths: I) -> FolderTree
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tree = FolderTree::new();

    for key in paths {
        let path = Path::new(key);
        let folder = path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| key.to_string());
        tree.entry(folder).or_default().push(name);
    }

    for names in tree.values_mut() {
        names.sort();
    }
    tree
}
