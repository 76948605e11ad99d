//! Edit entry use case

use crate::domain::entities::{Catalog, EditError, Field};

/// Sets one field of the entry stored under `path`.
///
/// `field` is a store key such as `comments` or `width`.
pub fn set_field(
    catalog: &mut Catalog,
    path: &str,
    field: &str,
    value: &str,
) -> Result<(), EditError> {
    let field: Field = field.parse()?;
    let entry = catalog
        .get_mut(path)
        .ok_or_else(|| EditError::UnknownPath(path.to_string()))?;

    entry.set(field, value)?;
    tracing::info!(path, %field, "updated catalog entry");
    Ok(())
}
