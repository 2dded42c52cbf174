//! Contains all the command handlers that are callable from the frontend via IPC.
//!
//! Each function in this module corresponds to a specific `IpcMessage::command`.
//! Handlers mutate the `AppState` and push a fresh `UiState` to the UI.

use super::filtering;
use super::helpers::{lock_state, notify, with_state_and_notify};
use super::proxy::EventProxy;
use super::state::AppState;
use crate::core::CoreError;
use std::sync::{Arc, Mutex};

/// Handles the initial request for state from the frontend when it loads.
pub fn initialize<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    let state_guard = lock_state(&state);
    tracing::info!(
        "Frontend initialized with {} categories.",
        state_guard.store.len()
    );
    notify(&state_guard, &proxy);
}

/// Updates the search text from the input field.
///
/// The payload is the complete current field value as a JSON string.
pub fn update_search<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) -> Result<(), CoreError> {
    let query = serde_json::from_value::<String>(payload).map_err(|source| {
        CoreError::InvalidPayload {
            command: "updateSearch".to_string(),
            source,
        }
    })?;

    with_state_and_notify(&state, &proxy, |s| {
        filtering::apply_search_query(s, &query);
    });
    Ok(())
}

/// Clears the search field and restores the full list.
pub fn clear_search<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, filtering::clear_search);
}
