//! Responsible for transforming the `AppState` into a `UiState` view model.
//!
//! This module acts as a presentation layer. It turns the store's filtered
//! view into the flat list of leaves the frontend renders and computes the
//! status line.

use serde::Serialize;

use super::filtering::is_query_pending;
use super::state::AppState;

/// A serializable representation of the application state for the UI.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UiState {
    pub search_query: String,
    pub tree: Vec<LeafNode>,
    pub total_categories: usize,
    pub visible_categories: usize,
    /// The field holds text too short to be applied.
    pub is_query_pending: bool,
    /// Whether the clear button should be shown.
    pub can_clear: bool,
    pub status_message: String,
}

/// One category in the rendered tree. Leaves never have children.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeafNode {
    pub name: String,
    pub content: String,
    /// Position of the category in the full, unfiltered list.
    pub index: usize,
}

/// Creates the complete `UiState` from the current `AppState`.
pub fn generate_ui_state(state: &AppState) -> UiState {
    let tree = build_leaves(state.store.categories(), state.store.current_filtered_view());
    let total_categories = state.store.len();
    let visible_categories = tree.len();
    let is_query_pending = is_query_pending(state);

    let status_message = if is_query_pending {
        format!(
            "Type at least {} characters to filter.",
            state.config.min_query_length
        )
    } else if visible_categories == 0 && total_categories > 0 {
        format!("No categories match \"{}\".", state.search_query)
    } else {
        format!("Showing {visible_categories} of {total_categories} categories.")
    };

    UiState {
        search_query: state.search_query.clone(),
        tree,
        total_categories,
        visible_categories,
        is_query_pending,
        can_clear: !state.search_query.is_empty(),
        status_message,
    }
}

/// Builds one leaf per visible category.
///
/// The visible list is an ordered subsequence of `all`, so the original
/// index of each entry is found with a single forward walk. This keeps
/// duplicates distinct: the second "tea" maps to the second position.
fn build_leaves(all: &[String], visible: &[String]) -> Vec<LeafNode> {
    let mut leaves = Vec::with_capacity(visible.len());
    let mut cursor = 0;

    for name in visible {
        let offset = all[cursor..].iter().position(|c| c == name);
        let index = match offset {
            Some(offset) => cursor + offset,
            // Not reachable while the subsequence invariant holds.
            None => {
                tracing::warn!("Visible category {:?} not found in category list.", name);
                continue;
            }
        };
        cursor = index + 1;
        leaves.push(LeafNode {
            name: name.clone(),
            content: name.clone(),
            index,
        });
    }

    leaves
}
