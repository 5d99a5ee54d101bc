use super::criteria::FilterCriteria;
use super::models::{CatalogEntry, Language};
use super::predicate::Predicate;
use super::repository::Repository;

/// Applies filter criteria to a whole catalog.
///
/// The catalog is small enough that every criteria change re-runs the full
/// scan; there is no incremental update.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    repository: Repository<'a>
}

impl<'a> FilterEngine<'a> {

    pub const fn new(repository: Repository<'a>) -> Self {
        Self { repository }
    }

    /// Matching entries in catalog order. Empty when nothing matches.
    ///
    /// A tab other than "all" scans only the precomputed entries of its type.
    pub fn filter(&self, criteria: &FilterCriteria, language: Language) -> Vec<&'a CatalogEntry> {
        match criteria.tab.entry_type() {
            Some(entry_type) => filter_entries(
                self.repository.entries_of_type(entry_type),
                self.repository.len(),
                criteria,
                language,
            ),
            None => filter(self.repository.entries(), criteria, language),
        }
    }

    pub fn has_any_matches(&self, criteria: &FilterCriteria, language: Language) -> bool {
        let predicate = Predicate::compose(criteria, language);
        self.repository.entries().iter().any(|entry| predicate.matches(entry))
    }
}

/// Filters `entries` by `criteria`, preserving their order.
pub fn filter<'a>(
    entries: &'a [CatalogEntry],
    criteria: &FilterCriteria,
    language: Language,
) -> Vec<&'a CatalogEntry> {
    filter_entries(entries, entries.len(), criteria, language)
}

fn filter_entries<'a, I>(
    entries: I,
    total: usize,
    criteria: &FilterCriteria,
    language: Language,
) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let predicate = Predicate::compose(criteria, language);
    let results: Vec<_> = entries
        .into_iter()
        .filter(|entry| predicate.matches(entry))
        .collect();

    tracing::debug!(
        search = %criteria.search_text,
        tab = %criteria.tab,
        levels = criteria.levels.len(),
        locations = criteria.locations.len(),
        online_only = criteria.online_only,
        free_only = criteria.free_only,
        %language,
        matched = results.len(),
        total,
        "filtered catalog"
    );

    results
}
