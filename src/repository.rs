use super::constants::APP_CATALOG;
use super::models::{Catalog, CatalogEntry, EntryType};

/// Read-only view over a compiled catalog.
#[derive(Debug, Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl <'a> Repository <'a> {

    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub const fn entries(&self) -> &'a [CatalogEntry] {
        self.catalog.entries
    }

    pub const fn len(&self) -> usize {
        self.catalog.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.catalog.entries.is_empty()
    }

    pub fn entry(&self, id: &str) -> Option<&'a CatalogEntry> {
        self.catalog
            .entries_map
            .get(id)
            .and_then(|&index| self.catalog.entries.get(index))
    }

    pub fn entries_of_type(&self, entry_type: EntryType) -> impl Iterator<Item = &'a CatalogEntry> + use<'a> {
        let entries = self.catalog.entries;
        self.catalog
            .type_entries
            .get(entry_type.index())
            .copied()
            .unwrap_or_default()
            .iter()
            .filter_map(move |&index| entries.get(index))
    }

}

impl Repository<'static> {
    /// The catalog compiled into this binary.
    pub fn bundled() -> Self {
        Self::new(&APP_CATALOG)
    }
}
