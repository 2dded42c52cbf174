//! The boundary between the search field and the filter store.
//!
//! Every keystroke is recorded in `AppState::search_query`, but the store is
//! only refiltered when the query is empty or at least
//! `config.min_query_length` characters long. A one-character query leaves
//! the previously visible list in place.

use crate::app::state::AppState;

/// Decides whether `query` should be forwarded to the filter store.
///
/// Length is counted in `char`s, so a single non-ASCII letter is one character.
pub fn should_forward_query(query: &str, min_query_length: usize) -> bool {
    query.is_empty() || query.chars().count() >= min_query_length
}

/// Records `query` as the current search text and refilters the store if
/// the gate allows it. Returns `true` if the store was refiltered.
pub fn apply_search_query(state: &mut AppState, query: &str) -> bool {
    state.search_query = query.to_string();

    if should_forward_query(query, state.config.min_query_length) {
        state.store.apply_query(query);
        true
    } else {
        tracing::debug!(
            "Query {:?} is shorter than {} characters, keeping current list.",
            query,
            state.config.min_query_length
        );
        false
    }
}

/// Clears the search text and restores the full category list.
pub fn clear_search(state: &mut AppState) {
    state.search_query.clear();
    state.store.apply_query("");
}

/// `true` when the field holds text that the gate has not forwarded.
pub fn is_query_pending(state: &AppState) -> bool {
    !should_forward_query(&state.search_query, state.config.min_query_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tracing_test::traced_test;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_gate_thresholds() {
        assert!(should_forward_query("", 2));
        assert!(!should_forward_query("a", 2));
        assert!(should_forward_query("ab", 2));
        assert!(should_forward_query("abc", 2));
        // Counts characters, not bytes.
        assert!(!should_forward_query("ä", 2));
        assert!(should_forward_query("äö", 2));
        // A minimum of zero or one forwards everything.
        assert!(should_forward_query("a", 1));
        assert!(should_forward_query("a", 0));
    }

    #[test]
    fn test_single_astral_character_is_one_character() {
        // U+1F600 is two UTF-16 code units and four UTF-8 bytes, but one `char`,
        // so it is held back like any other single character.
        let mut state = AppState::new(AppConfig {
            categories: vec!["happy 😀".to_string(), "plain".to_string()],
            ..Default::default()
        });
        assert!(!should_forward_query("😀", 2));
        assert!(!apply_search_query(&mut state, "😀"));
        assert_eq!(state.store.current_filtered_view().len(), 2);
        assert!(is_query_pending(&state));

        assert!(apply_search_query(&mut state, " 😀"));
        assert_eq!(state.store.current_filtered_view(), ["happy 😀"]);
    }

    #[test]
    fn test_single_character_query_does_not_narrow_the_list() {
        let mut state = test_state();
        let applied = apply_search_query(&mut state, "z");
        assert!(!applied);
        assert_eq!(state.search_query, "z");
        assert_eq!(state.store.current_filtered_view().len(), 6);
        assert!(is_query_pending(&state));
    }

    #[test]
    fn test_single_character_query_keeps_previous_result() {
        let mut state = test_state();
        apply_search_query(&mut state, "aaaaaa");
        assert_eq!(state.store.current_filtered_view().len(), 2);

        // Backspacing down to one character leaves the last list in place.
        apply_search_query(&mut state, "a");
        assert_eq!(state.store.current_filtered_view(), ["aaaaaa", "aaaaaaa"]);
    }

    #[test]
    fn test_two_character_query_filters() {
        let mut state = test_state();
        assert!(apply_search_query(&mut state, "zz"));
        assert!(state.store.current_filtered_view().is_empty());
        assert!(!is_query_pending(&state));
    }

    #[test]
    fn test_empty_query_resets_to_full_list() {
        let mut state = test_state();
        apply_search_query(&mut state, "zzz");
        assert!(apply_search_query(&mut state, ""));
        assert_eq!(state.store.current_filtered_view(), state.store.categories());
    }

    #[test]
    fn test_clear_search_resets_query_and_list() {
        let mut state = test_state();
        apply_search_query(&mut state, "aaaa");
        clear_search(&mut state);
        assert!(state.search_query.is_empty());
        assert_eq!(state.store.current_filtered_view().len(), 6);
    }

    #[test]
    fn test_configured_minimum_is_respected() {
        let mut state = AppState::new(AppConfig {
            min_query_length: 4,
            ..Default::default()
        });
        assert!(!apply_search_query(&mut state, "aaa"));
        assert_eq!(state.store.current_filtered_view().len(), 6);
        assert!(apply_search_query(&mut state, "aaaa"));
        assert_eq!(state.store.current_filtered_view().len(), 4);
    }

    #[test]
    #[traced_test]
    fn test_gated_query_is_logged() {
        let mut state = test_state();
        apply_search_query(&mut state, "q");
        assert!(logs_contain("keeping current list"));
    }
}
