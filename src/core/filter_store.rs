//! The single source of truth for the category list and its filtered projection.

use super::SearchEngine;

/// Owns the canonical category list and the currently visible subset.
///
/// The category list is fixed at construction. The visible subset is
/// replaced wholesale by [`FilterStore::apply_query`] and is always a
/// subsequence of the category list in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStore {
    categories: Vec<String>,
    filtered: Vec<String>,
}

impl FilterStore {
    /// Creates a store seeded with `seed`. Everything is visible initially.
    pub fn new(seed: Vec<String>) -> Self {
        let filtered = seed.clone();
        Self {
            categories: seed,
            filtered,
        }
    }

    /// Recomputes the visible subset for `query`.
    ///
    /// An empty query restores the full list. Any other query keeps the
    /// categories that contain it, ignoring case.
    pub fn apply_query(&mut self, query: &str) {
        self.filtered = SearchEngine::filter_categories(&self.categories, query);
        tracing::debug!(
            "Applied query {:?}: {} of {} categories visible",
            query,
            self.filtered.len(),
            self.categories.len()
        );
    }

    /// The result of the most recent [`FilterStore::apply_query`], or the full
    /// list if no query has been applied yet.
    pub fn current_filtered_view(&self) -> &[String] {
        &self.filtered
    }

    /// The full, unfiltered category list.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
