//! Composition of filter criteria into a single inclusion test.

use std::collections::BTreeSet;

use super::criteria::FilterCriteria;
use super::models::{CatalogEntry, EntryType, Language, Level};

/// One independent filter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Search,
    Tab,
    Level,
    Location,
    OnlineOnly,
    FreeOnly,
}

impl Rule {
    pub const ALL: [Self; 6] = [
        Self::Search,
        Self::Tab,
        Self::Level,
        Self::Location,
        Self::OnlineOnly,
        Self::FreeOnly,
    ];
}

/// Criteria resolved against a display language.
///
/// An entry matches when every active rule passes. Inactive rules always pass.
#[derive(Debug, Clone)]
pub struct Predicate<'c> {
    language: Language,
    search_term: Option<String>,
    entry_type: Option<EntryType>,
    levels: &'c BTreeSet<Level>,
    locations: &'c BTreeSet<String>,
    online_only: bool,
    free_only: bool,
}

impl<'c> Predicate<'c> {

    pub fn compose(criteria: &'c FilterCriteria, language: Language) -> Self {
        Self {
            language,
            search_term: criteria.search_term().map(str::to_lowercase),
            entry_type: criteria.tab.entry_type(),
            levels: &criteria.levels,
            locations: &criteria.locations,
            online_only: criteria.online_only,
            free_only: criteria.free_only,
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        Rule::ALL.iter().all(|&rule| self.rule_passes(rule, entry))
    }

    pub fn is_active(&self, rule: Rule) -> bool {
        match rule {
            Rule::Search => self.search_term.is_some(),
            Rule::Tab => self.entry_type.is_some(),
            Rule::Level => !self.levels.is_empty(),
            Rule::Location => !self.locations.is_empty(),
            Rule::OnlineOnly => self.online_only,
            Rule::FreeOnly => self.free_only,
        }
    }

    pub fn rule_passes(&self, rule: Rule, entry: &CatalogEntry) -> bool {
        match rule {
            Rule::Search => self.matches_search(entry),
            Rule::Tab => self.entry_type.is_none_or(|entry_type| entry.entry_type == entry_type),
            Rule::Level => self.matches_level(entry),
            Rule::Location => self.matches_location(entry),
            Rule::OnlineOnly => !self.online_only || entry.online,
            Rule::FreeOnly => !self.free_only || entry.is_free(),
        }
    }

    fn matches_search(&self, entry: &CatalogEntry) -> bool {
        let Some(term) = &self.search_term else {
            return true;
        };

        Self::contains_term(entry.title.get(self.language), term)
            || Self::contains_term(entry.description.get(self.language), term)
            || entry.tags.iter().any(|tag| Self::contains_term(tag, term))
    }

    // An entry without a level (or location) never survives an active
    // selection on that dimension.
    fn matches_level(&self, entry: &CatalogEntry) -> bool {
        if self.levels.is_empty() {
            return true;
        }
        entry.level.is_some_and(|level| self.levels.contains(&level))
    }

    fn matches_location(&self, entry: &CatalogEntry) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        entry.location.is_some_and(|location| self.locations.contains(location))
    }

    fn contains_term(text: &str, term: &str) -> bool {
        text.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Tab;
    use crate::models::LocalizedText;

    const WORKSHOP: CatalogEntry = CatalogEntry {
        id: "tenancy-workshop",
        title: LocalizedText { en: "Tenancy Rights Workshop", de: "Workshop Mietrecht" },
        description: LocalizedText {
            en: "What your rental contract may and may not contain.",
            de: "Was Ihr Mietvertrag enthalten darf und was nicht.",
        },
        entry_type: EntryType::Resource,
        level: None,
        location: None,
        price: None,
        online: false,
        duration: None,
        tags: &["Housing", "Rent"],
        provider: "Mieterhilfe",
    };

    #[test]
    fn empty_criteria_match_anything() {
        let criteria = FilterCriteria::new();
        let predicate = Predicate::compose(&criteria, Language::English);
        assert!(predicate.matches(&WORKSHOP));
        assert!(Rule::ALL.iter().all(|&rule| !predicate.is_active(rule)));
    }

    #[test]
    fn search_uses_active_language() {
        let criteria = FilterCriteria::new().with_search("mietrecht");
        assert!(!Predicate::compose(&criteria, Language::English).matches(&WORKSHOP));
        assert!(Predicate::compose(&criteria, Language::German).matches(&WORKSHOP));
    }

    #[test]
    fn search_matches_description_and_single_tags() {
        let by_description = FilterCriteria::new().with_search("CONTRACT");
        assert!(Predicate::compose(&by_description, Language::English).matches(&WORKSHOP));

        let by_tag = FilterCriteria::new().with_search("hous");
        assert!(Predicate::compose(&by_tag, Language::German).matches(&WORKSHOP));

        // Terms spanning two tags do not match.
        let across_tags = FilterCriteria::new().with_search("housing rent");
        assert!(!Predicate::compose(&across_tags, Language::English).matches(&WORKSHOP));
    }

    #[test]
    fn search_term_is_trimmed() {
        let criteria = FilterCriteria::new().with_search("  rent  ");
        assert!(Predicate::compose(&criteria, Language::English).matches(&WORKSHOP));
    }

    #[test]
    fn tab_restricts_entry_type() {
        let resources = FilterCriteria::new().with_tab(Tab::Resources);
        let exams = FilterCriteria::new().with_tab(Tab::Exams);
        assert!(Predicate::compose(&resources, Language::English).matches(&WORKSHOP));
        assert!(!Predicate::compose(&exams, Language::English).matches(&WORKSHOP));
    }

    #[test]
    fn absent_level_and_location_are_excluded_by_active_selection() {
        let by_level = FilterCriteria::new().with_level(Level::Beginner);
        let predicate = Predicate::compose(&by_level, Language::English);
        assert!(!predicate.rule_passes(Rule::Level, &WORKSHOP));
        assert!(predicate.rule_passes(Rule::Location, &WORKSHOP));

        let by_location = FilterCriteria::new().with_location("Wien");
        let predicate = Predicate::compose(&by_location, Language::English);
        assert!(!predicate.matches(&WORKSHOP));
    }

    #[test]
    fn free_only_excludes_unknown_price() {
        let criteria = FilterCriteria::new().free_only();
        let predicate = Predicate::compose(&criteria, Language::English);
        assert!(!predicate.matches(&WORKSHOP));

        let free = CatalogEntry { price: Some(0), ..WORKSHOP };
        assert!(predicate.matches(&free));

        let paid = CatalogEntry { price: Some(25), ..WORKSHOP };
        assert!(!predicate.matches(&paid));
    }

    #[test]
    fn online_only_requires_online_flag() {
        let criteria = FilterCriteria::new().online_only();
        let predicate = Predicate::compose(&criteria, Language::English);
        assert!(!predicate.matches(&WORKSHOP));
        assert!(predicate.matches(&CatalogEntry { online: true, ..WORKSHOP }));
    }

    #[test]
    fn selections_are_or_within_category() {
        let criteria = FilterCriteria::new()
            .with_location("Graz")
            .with_location("Wien");
        let predicate = Predicate::compose(&criteria, Language::English);
        assert!(predicate.matches(&CatalogEntry { location: Some("Wien"), ..WORKSHOP }));
        assert!(!predicate.matches(&CatalogEntry { location: Some("Linz"), ..WORKSHOP }));
    }
}
