//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::Aggregator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Aggregator instance orchestrating the upstream providers
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Create a new application state with the given aggregator.
    pub fn new(aggregator: Arc<Aggregator>) -> Self {
        Self { aggregator }
    }
}
