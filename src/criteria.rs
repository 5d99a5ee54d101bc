//! User-driven filter state for the catalog listing.

use std::collections::BTreeSet;

use super::error::{Error, Result};
use super::models::{EntryType, Level};

/// Category tab selected above the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    All,
    Courses,
    Resources,
    Exams,
}

impl Tab {
    /// Parses a tab name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTab`] for anything other than
    /// `all`, `courses`, `resources` or `exams`.
    pub fn parse(string: &str) -> Result<Self> {
        match string.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "courses" => Ok(Self::Courses),
            "resources" => Ok(Self::Resources),
            "exams" => Ok(Self::Exams),
            _ => Err(Error::UnknownTab(string.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Courses => "courses",
            Self::Resources => "resources",
            Self::Exams => "exams",
        }
    }

    /// The entry type this tab restricts to, `None` for [`Tab::All`].
    #[must_use]
    pub const fn entry_type(&self) -> Option<EntryType> {
        match self {
            Self::All => None,
            Self::Courses => Some(EntryType::Course),
            Self::Resources => Some(EntryType::Resource),
            Self::Exams => Some(EntryType::Exam),
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tab {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        Self::parse(string)
    }
}

/// Parses a level name for a level selection.
///
/// # Errors
///
/// Returns [`Error::UnknownLevel`] for anything other than
/// `beginner`, `intermediate` or `advanced`.
pub fn parse_level(string: &str) -> Result<Level> {
    Level::parse(string).ok_or_else(|| Error::UnknownLevel(string.to_string()))
}

/// The complete set of filters applied to the catalog.
///
/// Categories combine with AND; the level and location selections are each
/// an OR over their members. The default value has no active criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively. Blank means no search.
    pub search_text: String,
    pub tab: Tab,
    /// Empty means any level, including none.
    pub levels: BTreeSet<Level>,
    /// Empty means any location, including none.
    pub locations: BTreeSet<String>,
    pub online_only: bool,
    pub free_only: bool,
}

impl FilterCriteria {
    /// Creates criteria that match every entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub const fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.insert(level);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }

    #[must_use]
    pub const fn online_only(mut self) -> Self {
        self.online_only = true;
        self
    }

    #[must_use]
    pub const fn free_only(mut self) -> Self {
        self.free_only = true;
        self
    }

    /// Trimmed search text, or `None` when the search is blank.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search_text.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Number of active criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.search_term().is_some(),
            self.tab != Tab::All,
            !self.levels.is_empty(),
            !self.locations.is_empty(),
            self.online_only,
            self.free_only,
        ]
        .into_iter()
        .filter(|&active| active)
        .count()
    }

    /// True when no criterion is active, i.e. every entry passes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Adds `level` to the selection, or removes it if already selected.
    pub fn toggle_level(&mut self, level: Level) {
        if !self.levels.remove(&level) {
            self.levels.insert(level);
        }
    }

    /// Adds `location` to the selection, or removes it if already selected.
    pub fn toggle_location(&mut self, location: &str) {
        if !self.locations.remove(location) {
            self.locations.insert(location.to_string());
        }
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parse_accepts_known_names() {
        assert_eq!(Tab::parse("Exams").unwrap(), Tab::Exams);
        assert_eq!(" courses ".parse::<Tab>().unwrap(), Tab::Courses);
        assert!(matches!(Tab::parse("videos"), Err(Error::UnknownTab(name)) if name == "videos"));
    }

    #[test]
    fn level_names() {
        assert_eq!(parse_level("Intermediate").unwrap(), Level::Intermediate);
        assert!(matches!(parse_level("expert"), Err(Error::UnknownLevel(_))));
    }

    #[test]
    fn tab_maps_to_entry_type() {
        assert_eq!(Tab::All.entry_type(), None);
        assert_eq!(Tab::Resources.entry_type(), Some(EntryType::Resource));
    }

    #[test]
    fn default_criteria_are_empty() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(criteria.search_term(), None);
    }

    #[test]
    fn blank_search_is_not_active() {
        let criteria = FilterCriteria::new().with_search("   ");
        assert!(criteria.is_empty());
    }

    #[test]
    fn active_count_covers_every_category() {
        let criteria = FilterCriteria::new()
            .with_search(" german ")
            .with_tab(Tab::Courses)
            .with_level(Level::Beginner)
            .with_location("Wien")
            .online_only()
            .free_only();
        assert_eq!(criteria.active_count(), 6);
        assert_eq!(criteria.search_term(), Some("german"));
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_level(Level::Advanced);
        criteria.toggle_location("Graz");
        assert_eq!(criteria.active_count(), 2);

        criteria.toggle_level(Level::Advanced);
        criteria.toggle_location("Graz");
        assert!(criteria.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut criteria = FilterCriteria::new().free_only().with_tab(Tab::Exams);
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
