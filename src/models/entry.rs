use super::entry_type::EntryType;
use super::level::Level;
use super::localized::LocalizedText;
use super::{String, Tags};

/// One listable offering: a course, a resource or an exam.
///
/// `level` and `location` being absent mean "not level-specific" and
/// "not tied to a place". `price` is in whole euros; `Some(0)` is free and
/// `None` is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub entry_type: EntryType,
    pub level: Option<Level>,
    pub location: Option<String>,
    pub price: Option<u32>,
    pub online: bool,
    pub duration: Option<String>,
    pub tags: Tags,
    pub provider: String,
}

impl CatalogEntry {
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self.price, Some(0))
    }
}
