// src/state.rs
use std::sync::Arc;

use crate::services::provider::ChatProvider;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state. Requests share nothing mutable.
pub struct AppState {
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }
}
