//! Filtering the bundled catalog with the criteria a listing screen produces.

use newcomer_guide::{
    CatalogEntry, FilterCriteria, FilterEngine, Language, Level, Predicate, Repository, Rule, Tab, filter,
};

fn engine() -> FilterEngine<'static> {
    FilterEngine::new(Repository::bundled())
}

fn ids(entries: &[&CatalogEntry]) -> Vec<&'static str> {
    entries.iter().map(|entry| entry.id).collect()
}

#[test]
fn bundled_catalog_holds_the_six_sample_entries() {
    let all = ids(&Repository::bundled().entries().iter().collect::<Vec<_>>());
    assert_eq!(
        all,
        ["german-a1", "german-b1", "job-search", "german-practice", "integration-exam", "computer-skills"]
    );
}

#[test]
fn search_german_keeps_store_order() {
    let criteria = FilterCriteria::new().with_search("german");
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-a1", "german-b1", "german-practice"]);
}

#[test]
fn search_german_matches_tags_in_german_display() {
    let criteria = FilterCriteria::new().with_search("german");
    let results = engine().filter(&criteria, Language::German);
    assert_eq!(ids(&results), ["german-a1", "german-b1", "german-practice"]);
}

#[test]
fn exams_tab() {
    let criteria = FilterCriteria::new().with_tab(Tab::Exams);
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["integration-exam"]);
}

#[test]
fn resources_tab() {
    let criteria = FilterCriteria::new().with_tab(Tab::Resources);
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["job-search"]);
}

#[test]
fn free_only() {
    let criteria = FilterCriteria::new().free_only();
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["job-search", "german-practice"]);
}

#[test]
fn beginner_level_excludes_entries_without_level() {
    let criteria = FilterCriteria::new().with_level(Level::Beginner);
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-a1", "german-practice", "computer-skills"]);
}

#[test]
fn online_beginner() {
    let criteria = FilterCriteria::new().online_only().with_level(Level::Beginner);
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-practice"]);
}

#[test]
fn location_filter_excludes_entries_without_location() {
    let criteria = FilterCriteria::new().with_location("Wien");
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-a1", "job-search", "integration-exam"]);
}

#[test]
fn several_locations_are_alternatives() {
    let criteria = FilterCriteria::new().with_location("Graz").with_location("Linz");
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-b1", "computer-skills"]);
}

#[test]
fn nothing_matching_yields_empty_list() {
    let criteria = FilterCriteria::new().with_tab(Tab::Exams).free_only();
    assert!(engine().filter(&criteria, Language::English).is_empty());
}

#[test]
fn free_function_filters_arbitrary_slices() {
    let entries = &Repository::bundled().entries()[..2];
    let criteria = FilterCriteria::new().with_level(Level::Intermediate);
    assert_eq!(ids(&filter(entries, &criteria, Language::English)), ["german-b1"]);
}

#[test]
fn every_result_passes_each_active_rule() {
    let criteria = FilterCriteria::new()
        .with_search("a")
        .with_tab(Tab::Courses)
        .with_level(Level::Beginner)
        .with_location("Wien")
        .with_location("Linz");
    let results = engine().filter(&criteria, Language::English);
    assert_eq!(ids(&results), ["german-a1", "computer-skills"]);

    let predicate = Predicate::compose(&criteria, Language::English);
    for entry in results {
        for rule in Rule::ALL {
            assert!(predicate.rule_passes(rule, entry), "{} fails {rule:?}", entry.id);
        }
    }
}
