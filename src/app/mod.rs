//! The application layer: state, IPC command dispatch and the bridge to the WebView.

pub mod commands;
pub mod events;
pub mod filtering;
pub mod helpers;
pub mod proxy;
pub mod state;
pub mod view_model;

use std::sync::{Arc, Mutex};

use crate::core::CoreError;
use events::{IpcMessage, UserEvent};
use proxy::EventProxy;
use state::AppState;

/// Entry point for every message posted by the frontend via `window.ipc.postMessage`.
///
/// Failures never propagate to the WebView's IPC thread; they are logged
/// and surfaced to the user as a `ShowError` event.
pub fn handle_ipc_message<P: EventProxy>(message: String, proxy: P, state: Arc<Mutex<AppState>>) {
    if let Err(e) = dispatch_ipc_message(&message, proxy.clone(), state) {
        tracing::warn!("Failed to handle IPC message {:?}: {}", message, e);
        proxy.send_event(UserEvent::ShowError(e.to_string()));
    }
}

/// Parses `message` and routes it to the matching command handler.
pub fn dispatch_ipc_message<P: EventProxy>(
    message: &str,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) -> Result<(), CoreError> {
    let msg: IpcMessage = serde_json::from_str(message)?;
    tracing::debug!("IPC command received: {}", msg.command);

    match msg.command.as_str() {
        "initialize" => commands::initialize(proxy, state),
        "updateSearch" => commands::update_search(msg.payload, proxy, state)?,
        "clearSearch" => commands::clear_search(proxy, state),
        other => return Err(CoreError::UnknownCommand(other.to_string())),
    }
    Ok(())
}

/// Delivers a backend event to the frontend by calling the matching `window.*` function.
pub fn handle_user_event(event: UserEvent, webview: &wry::WebView) {
    let script = match render_script(&event) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!("Failed to serialize event for the UI: {}", e);
            return;
        }
    };

    if let Err(e) = webview.evaluate_script(&script) {
        tracing::error!("Failed to evaluate script in WebView: {}", e);
    }
}

/// Builds the JavaScript snippet that hands `event` to the frontend.
pub fn render_script(event: &UserEvent) -> Result<String, serde_json::Error> {
    Ok(match event {
        UserEvent::StateUpdate(ui_state) => {
            format!("window.render({});", serde_json::to_string(ui_state)?)
        }
        UserEvent::ShowError(message) => {
            format!("window.showError({});", serde_json::to_string(message)?)
        }
    })
}
