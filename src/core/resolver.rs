use crate::domain::ports::CatalogEntry;
use crate::utils::error::{GuideError, Result};

/// Find the first record whose name matches `name` ignoring case.
///
/// Both sides are folded with full Unicode lowercasing, so accented names match
/// regardless of how they are typed. Duplicate names resolve to the earliest entry.
pub fn resolve<'a, T: CatalogEntry>(catalog: &'a [T], name: &str) -> Result<&'a T> {
    let wanted = name.to_lowercase();

    match catalog.iter().find(|entry| entry.name().to_lowercase() == wanted) {
        Some(entry) => {
            tracing::debug!("Resolved {} '{}' to '{}'", T::KIND, name, entry.name());
            Ok(entry)
        }
        None => {
            tracing::debug!("No {} matches '{}'", T::KIND, name);
            Err(GuideError::NotFound {
                kind: T::KIND,
                name: name.to_string(),
                options: joined_names(catalog),
            })
        }
    }
}

/// Names in catalog order separated by ", ".
pub fn joined_names<T: CatalogEntry>(catalog: &[T]) -> String {
    catalog
        .iter()
        .map(|entry| entry.name())
        .collect::<Vec<_>>()
        .join(", ")
}
