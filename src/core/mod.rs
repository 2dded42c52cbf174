pub mod error;
pub mod filter_store;
pub mod search;

/// The seed list the store is built from when no configuration overrides it.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["aa", "aaa", "aaaa", "aaaaa", "aaaaaa", "aaaaaaa"];

/// Returns [`DEFAULT_CATEGORIES`] as owned strings.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

pub use error::CoreError;
pub use filter_store::FilterStore;
pub use search::SearchEngine;
