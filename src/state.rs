//! Shared application state for all routes.

use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Owned by the server lifecycle; flushed once more on shutdown.
    pub store: Arc<DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}
