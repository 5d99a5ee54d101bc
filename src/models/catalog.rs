use super::entry::CatalogEntry;

/// The compiled, read-only catalog store.
#[derive(Debug)]
pub struct Catalog {
    pub entries: &'static [CatalogEntry],
    pub entries_map: phf::Map<&'static str, usize>,
    pub type_entries: &'static [&'static [usize]],
}
