//! Defines the central, mutable state of the application.

use crate::config::AppConfig;
use crate::core::FilterStore;
use tao::dpi::{PhysicalPosition, PhysicalSize};

/// Holds the complete, mutable state of the application.
///
/// There is exactly one instance, created in `main` and shared through an
/// `Arc<Mutex<...>>` between the IPC handler and the window event loop.
#[derive(Debug)]
pub struct AppState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The raw text currently in the search field, whether or not it was
    /// forwarded to the store.
    pub search_query: String,
    /// The category list and its current filtered projection.
    pub store: FilterStore,
}

impl Default for AppState {
    /// Creates a default `AppState` instance, loading the configuration from disk.
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });
        Self::new(config)
    }
}

impl AppState {
    /// Creates the state with the store seeded from `config.categories`.
    pub fn new(config: AppConfig) -> Self {
        let store = FilterStore::new(config.categories.clone());
        tracing::info!("Seeded filter store with {} categories.", store.len());
        Self {
            config,
            search_query: String::new(),
            store,
        }
    }

    /// Records the window size in logical units, the unit the window is
    /// restored with on the next launch.
    pub fn remember_window_size(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        self.config.window_size = logical_window_size(size, scale_factor);
    }

    /// Records the window position in logical units.
    pub fn remember_window_position(&mut self, position: PhysicalPosition<i32>, scale_factor: f64) {
        self.config.window_position = logical_window_position(position, scale_factor);
    }
}

/// Converts a physical window size (as reported by `tao`) to logical units.
pub fn logical_window_size(size: PhysicalSize<u32>, scale_factor: f64) -> (f64, f64) {
    let logical = size.to_logical::<f64>(scale_factor);
    (logical.width, logical.height)
}

/// Converts a physical window position (as reported by `tao`) to logical units.
pub fn logical_window_position(position: PhysicalPosition<i32>, scale_factor: f64) -> (f64, f64) {
    let logical = position.to_logical::<f64>(scale_factor);
    (logical.x, logical.y)
}
