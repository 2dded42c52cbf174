pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::default_categories;

/// Queries shorter than this (but not empty) leave the list as it is.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// The seed list the filter store is built from at startup.
    pub categories: Vec<String>,
    pub min_query_length: usize,
    pub window_size: (f64, f64),
    pub window_position: (f64, f64),
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            window_size: (420.0, 720.0),
            window_position: (100.0, 100.0),
        }
    }
}
