//! Supplier table and its queries.

use crate::models::Supplier;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory supplier table keyed by supplier ID.
///
/// Save is an unconditional upsert; the write lock makes it atomic with
/// respect to concurrent saves of the same ID.
#[derive(Clone, Default)]
pub struct SupplierStore {
    suppliers: Arc<RwLock<HashMap<i32, Supplier>>>,
}

impl SupplierStore {
    pub fn new() -> Self {
        Self {
            suppliers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace by supplier ID.
    pub async fn save(&self, supplier: Supplier) {
        let mut suppliers = self.suppliers.write().await;
        suppliers.insert(supplier.supplier_id, supplier);
    }

    /// Find a supplier by ID
    pub async fn find_by_id(&self, id: i32) -> Option<Supplier> {
        let suppliers = self.suppliers.read().await;
        suppliers.get(&id).cloned()
    }

    /// List all suppliers (unordered)
    pub async fn all(&self) -> Vec<Supplier> {
        let suppliers = self.suppliers.read().await;
        suppliers.values().cloned().collect()
    }

    /// Suppliers whose date lies within `[start, end]`, both ends inclusive.
    pub async fn find_by_date_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<Supplier> {
        let suppliers = self.suppliers.read().await;
        suppliers
            .values()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect()
    }
}
