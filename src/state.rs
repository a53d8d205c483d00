//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; every handler borrows the same client.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        AppState { store }
    }
}
