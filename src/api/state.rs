//! Application state for the bean calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalculatorConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the immutable calculator configuration. Requests share nothing
/// else, so each one is handled independently.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<CalculatorConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns a reference to the calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
