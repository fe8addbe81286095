//! Supplier business operations
//!
//! Handles the business logic for saving and retrieving supplier
//! information; all persistence goes through the supplier store.

use crate::error::SupplierError;
use crate::models::{Supplier, SupplierReport, SupplierReportEntry};
use crate::store::SupplierStore;
use tracing::{info, warn};

/// Supplier service wired at startup with the store it depends on.
pub struct SupplierService {
    store: SupplierStore,
}

impl SupplierService {
    pub fn new(store: SupplierStore) -> Self {
        Self { store }
    }

    /// Save a new supplier or replace an existing one; always succeeds.
    pub async fn save(&self, supplier: Supplier) -> String {
        info!("Saving supplier info for supplier with ID: {}", supplier.supplier_id);
        self.store.save(supplier).await;
        "Supplier info saved".to_string()
    }

    /// Retrieve a supplier by its unique ID.
    pub async fn get_by_id(&self, supplier_id: i32) -> Result<Supplier, SupplierError> {
        info!("Attempting to retrieve supplier info for ID: {}", supplier_id);
        self.store.find_by_id(supplier_id).await.ok_or_else(|| {
            warn!("Supplier not found for ID: {}", supplier_id);
            SupplierError::SupplierNotFound("Supplier with this ID is not present".to_string())
        })
    }

    /// List every supplier. An empty store is an empty list, not an error.
    pub async fn get_all(&self) -> Vec<Supplier> {
        self.store.all().await
    }

    /// Report rows for the inclusive date window.
    ///
    /// An empty window surfaces as `ReportNotFound` rather than an empty
    /// list; callers relying on the report treat "no data" as a failure.
    pub async fn get_report(
        &self,
        report: SupplierReport,
    ) -> Result<Vec<SupplierReportEntry>, SupplierError> {
        info!(
            "Attempting to retrieve supplier reports for the period from {} to {}",
            report.start_date, report.end_date
        );

        let rows = self
            .store
            .find_by_date_between(report.start_date, report.end_date)
            .await;

        if rows.is_empty() {
            warn!(
                "No supplier information found during the period from {} to {}",
                report.start_date, report.end_date
            );
            return Err(SupplierError::ReportNotFound(
                "There is no supplier information during this period!!".to_string(),
            ));
        }

        info!("Successfully retrieved {} supplier reports for the specified period", rows.len());
        Ok(rows.iter().map(SupplierReportEntry::from).collect())
    }
}
