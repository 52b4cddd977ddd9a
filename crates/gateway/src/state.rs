//! Application state for dependency injection.

use std::sync::Arc;

use register_service_lib::Registrar;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<dyn Registrar>,
}

impl AppState {
    /// Create new app state.
    pub fn new(registrar: Arc<dyn Registrar>) -> Self {
        Self { registrar }
    }
}
