//! Provides the matching logic used to narrow the category list.

use rayon::prelude::*;

/// A utility struct for matching and filtering category names.
///
/// This struct is stateless and provides methods as associated functions.
/// Matching is a literal, case-insensitive substring test. There is no
/// ranking, tokenization or fuzzy matching.
pub struct SearchEngine;

impl SearchEngine {
    /// Returns the subsequence of `categories` that match `query`.
    ///
    /// The result keeps the input order: rayon's indexed `collect` into a
    /// `Vec` is order-preserving. An empty query returns a full copy.
    pub fn filter_categories(categories: &[String], query: &str) -> Vec<String> {
        if query.is_empty() {
            return categories.to_vec();
        }

        let query_lower = query.to_lowercase();
        categories
            .par_iter()
            .filter(|category| Self::matches_lowered(category, &query_lower))
            .cloned()
            .collect()
    }

    fn matches_lowered(category: &str, query_lower: &str) -> bool {
        category.to_lowercase().contains(query_lower)
    }
}
