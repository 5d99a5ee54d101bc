//! # Newcomer Guide
//!
//! Bilingual (English/German) catalog of courses, resources and exams for
//! newcomers in Austria, and the filter engine behind its listing screen.
//!
//! The catalog is compiled into the crate from `resources/catalog.toml`.
//! Filtering is a pure function of the catalog, a [`FilterCriteria`] value
//! and the display [`Language`]:
//!
//! ```rust
//! use newcomer_guide::{FilterCriteria, FilterEngine, Language, Repository, Tab};
//!
//! let engine = FilterEngine::new(Repository::bundled());
//! let criteria = FilterCriteria::new().with_search("german").with_tab(Tab::Courses);
//! let results = engine.filter(&criteria, Language::German);
//!
//! let ids: Vec<_> = results.iter().map(|entry| entry.id).collect();
//! assert_eq!(ids, ["german-a1", "german-b1", "german-practice"]);
//! assert_eq!(results[0].title.get(Language::German), "Deutschkurs A1");
//! ```

pub mod config;
pub mod constants;
pub mod criteria;
pub mod error;
pub mod facets;
pub mod filter_engine;
pub mod models;
pub mod observability;
pub mod predicate;
pub mod preferences;
pub mod repository;
pub mod rich_text;
pub mod session;

pub use config::Config;
pub use criteria::{FilterCriteria, Tab};
pub use error::{Error, Result};
pub use filter_engine::{FilterEngine, filter};
pub use models::{Catalog, CatalogEntry, EntryType, Language, Level, LocalizedText};
pub use predicate::{Predicate, Rule};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use repository::Repository;
pub use session::{FilterSession, Ticket};
