//! Properties of the filter engine over generated criteria.

use proptest::prelude::*;
use newcomer_guide::{
    CatalogEntry, FilterCriteria, FilterEngine, Language, Level, Predicate, Repository, Rule, Tab,
};

fn engine() -> FilterEngine<'static> {
    FilterEngine::new(Repository::bundled())
}

fn ids(entries: &[&CatalogEntry]) -> Vec<&'static str> {
    entries.iter().map(|entry| entry.id).collect()
}

fn tab_strategy() -> impl Strategy<Value = Tab> {
    prop::sample::select(vec![Tab::All, Tab::Courses, Tab::Resources, Tab::Exams])
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(vec![Language::English, Language::German])
}

fn search_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(vec!["german", "Kurs", "exam", "WORK", " online ", "deutsch", "b1"])
            .prop_map(str::to_string),
        "[a-zA-Z ]{0,6}",
    ]
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        search_strategy(),
        tab_strategy(),
        prop::collection::btree_set(prop::sample::select(Level::all().to_vec()), 0..3),
        prop::collection::btree_set(
            prop::sample::select(vec!["Wien".to_string(), "Graz".to_string(), "Linz".to_string(), "Salzburg".to_string()]),
            0..3,
        ),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(search_text, tab, levels, locations, online_only, free_only)| FilterCriteria {
            search_text,
            tab,
            levels,
            locations,
            online_only,
            free_only,
        })
}

#[test]
fn empty_criteria_return_full_store() {
    for &language in Language::all() {
        let results = engine().filter(&FilterCriteria::new(), language);
        let all: Vec<_> = Repository::bundled().entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids(&results), all);
    }
}

proptest! {
    /// Filtering twice gives the same answer.
    #[test]
    fn prop_filter_is_idempotent(criteria in criteria_strategy(), language in language_strategy()) {
        let first = engine().filter(&criteria, language);
        let second = engine().filter(&criteria, language);
        prop_assert_eq!(ids(&first), ids(&second));
    }

    /// Turning on another criterion never adds results.
    #[test]
    fn prop_extra_criterion_never_widens(
        criteria in criteria_strategy(),
        language in language_strategy(),
        extra in 0usize..4,
    ) {
        let before = engine().filter(&criteria, language);
        let narrowed = match extra {
            0 => criteria.clone().online_only(),
            1 => criteria.clone().free_only(),
            2 if criteria.levels.is_empty() => criteria.clone().with_level(Level::Beginner),
            3 if criteria.locations.is_empty() => criteria.clone().with_location("Wien"),
            _ => criteria.clone(),
        };
        let after = engine().filter(&narrowed, language);

        prop_assert!(after.len() <= before.len());
        for entry in &after {
            prop_assert!(before.iter().any(|kept| kept.id == entry.id));
        }
    }

    /// Every result satisfies every rule on its own.
    #[test]
    fn prop_results_satisfy_each_rule(criteria in criteria_strategy(), language in language_strategy()) {
        let predicate = Predicate::compose(&criteria, language);
        for entry in engine().filter(&criteria, language) {
            for rule in Rule::ALL {
                prop_assert!(predicate.rule_passes(rule, entry));
            }
        }
    }

    /// Entries left out fail at least one active rule.
    #[test]
    fn prop_excluded_entries_fail_an_active_rule(criteria in criteria_strategy(), language in language_strategy()) {
        let predicate = Predicate::compose(&criteria, language);
        let results = ids(&engine().filter(&criteria, language));
        for entry in Repository::bundled().entries() {
            if !results.contains(&entry.id) {
                prop_assert!(Rule::ALL.iter().any(|&rule| predicate.is_active(rule) && !predicate.rule_passes(rule, entry)));
            }
        }
    }

    /// Search ignores case.
    #[test]
    fn prop_search_is_case_insensitive(term in "[a-zA-Z]{1,8}", language in language_strategy()) {
        let lower = engine().filter(&FilterCriteria::new().with_search(term.to_lowercase()), language);
        let upper = engine().filter(&FilterCriteria::new().with_search(term.to_uppercase()), language);
        prop_assert_eq!(ids(&lower), ids(&upper));
    }
}

#[test]
fn search_case_insensitivity_example() {
    let upper = engine().filter(&FilterCriteria::new().with_search("GERMAN"), Language::English);
    let lower = engine().filter(&FilterCriteria::new().with_search("german"), Language::English);
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(upper.len(), 3);
}
