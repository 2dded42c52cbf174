//! Defines the custom error type for the `core` module.

use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Filtering itself cannot fail. These variants cover the edges around it:
/// decoding and routing IPC messages from the frontend.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The raw IPC message was not a valid `{ command, payload }` object.
    #[error("Malformed IPC message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    /// The payload did not have the shape the command expects.
    #[error("Invalid payload for command '{command}': {source}")]
    InvalidPayload {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The frontend asked for a command the backend does not know.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
