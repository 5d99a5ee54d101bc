//! Filterable dimensions derived from the catalog contents.

use std::collections::BTreeSet;

use super::models::{CatalogEntry, Level};

/// Every distinct location present in `entries`.
///
/// Entries without a location contribute nothing; there is no sentinel for
/// "online" or "anywhere".
pub fn locations<'a, I>(entries: I) -> BTreeSet<&'a str>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| entry.location)
        .collect()
}

/// Every distinct level present in `entries`, in ascending order.
pub fn levels<'a, I>(entries: I) -> BTreeSet<Level>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| entry.level)
        .collect()
}
