//! Application state management
//!
//! Contains shared state accessible across all handlers; the service and
//! its store are constructed here, at startup.

use crate::service::SupplierService;
use crate::store::SupplierStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Supplier CRUD and reporting
    pub suppliers: SupplierService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            suppliers: SupplierService::new(SupplierStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
