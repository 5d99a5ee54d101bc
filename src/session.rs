//! Criteria state owned by a listing screen, with stale-result protection.
//!
//! Each change to the criteria bumps a generation and hands back a
//! [`Ticket`]. A recomputation started with an older ticket can finish after
//! a newer one; [`FilterSession::publish`] drops such results so the visible
//! list always belongs to the latest criteria.

use super::criteria::{FilterCriteria, Tab};
use super::filter_engine::FilterEngine;
use super::models::{CatalogEntry, Language, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct FilterSession<'a> {
    criteria: FilterCriteria,
    generation: u64,
    published: Option<u64>,
    results: Vec<&'a CatalogEntry>,
}

impl<'a> FilterSession<'a> {

    pub fn new() -> Self {
        Self::default()
    }

    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Results of the latest published recomputation.
    pub fn results(&self) -> &[&'a CatalogEntry] {
        &self.results
    }

    /// True when the published results belong to the current criteria.
    pub fn is_current(&self) -> bool {
        self.published == Some(self.generation)
    }

    pub const fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> Ticket {
        self.criteria.search_text = text.into();
        self.bump()
    }

    pub fn set_tab(&mut self, tab: Tab) -> Ticket {
        self.criteria.tab = tab;
        self.bump()
    }

    pub fn toggle_level(&mut self, level: Level) -> Ticket {
        self.criteria.toggle_level(level);
        self.bump()
    }

    pub fn toggle_location(&mut self, location: &str) -> Ticket {
        self.criteria.toggle_location(location);
        self.bump()
    }

    pub fn set_online_only(&mut self, online_only: bool) -> Ticket {
        self.criteria.online_only = online_only;
        self.bump()
    }

    pub fn set_free_only(&mut self, free_only: bool) -> Ticket {
        self.criteria.free_only = free_only;
        self.bump()
    }

    /// Stores `results` if `ticket` is still the latest one.
    ///
    /// Returns `false`, leaving the visible results untouched, for a stale
    /// ticket.
    pub fn publish(&mut self, ticket: Ticket, results: Vec<&'a CatalogEntry>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                generation = self.generation,
                "discarding stale filter results"
            );
            return false;
        }

        self.results = results;
        self.published = Some(ticket.0);
        true
    }

    /// Recomputes synchronously against `engine` and publishes the results.
    pub fn refresh(&mut self, engine: &FilterEngine<'a>, language: Language) -> &[&'a CatalogEntry] {
        let ticket = self.ticket();
        let results = engine.filter(&self.criteria, language);
        self.publish(ticket, results);
        &self.results
    }

    fn bump(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }
}
