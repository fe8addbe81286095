//! Supplier route handlers
//!
//! Each handler validates the request body, invokes one service operation,
//! and lets the error boundary map failures to status codes.

use crate::error::SupplierError;
use crate::models::{Supplier, SupplierReport, SupplierReportEntry};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use validator::Validate;

/// POST /api/supplier/add
///
/// Add a new supplier (or replace an existing one with the same ID). The
/// body of the 200 response is a confirmation string.
pub async fn save_supplier_info(
    State(state): State<SharedState>,
    Json(supplier): Json<Supplier>,
) -> Result<String, SupplierError> {
    supplier.validate()?;

    info!("Received request to add a new supplier: {}", supplier.supplier_id);
    Ok(state.suppliers.save(supplier).await)
}

/// GET /api/supplier/supplierInfoById/{id}
pub async fn get_supplier_info(
    State(state): State<SharedState>,
    Path(supplier_id): Path<i32>,
) -> Result<Json<Supplier>, SupplierError> {
    info!("Received request to get supplier info for ID: {}", supplier_id);
    let supplier = state.suppliers.get_by_id(supplier_id).await?;
    Ok(Json(supplier))
}

/// GET /api/supplier/viewAllSupplier
pub async fn get_all_supplier(State(state): State<SharedState>) -> Json<Vec<Supplier>> {
    Json(state.suppliers.get_all().await)
}

/// POST /api/supplier/supplierInfoByDateForReport
///
/// Generate report rows for the date range in the request body.
pub async fn get_supplier_info_for_report(
    State(state): State<SharedState>,
    Json(report): Json<SupplierReport>,
) -> Result<Json<Vec<SupplierReportEntry>>, SupplierError> {
    info!(
        "Received request to generate supplier report for date range: {} to {}",
        report.start_date, report.end_date
    );
    let entries = state.suppliers.get_report(report).await?;
    info!("Generated report with {} entries", entries.len());
    Ok(Json(entries))
}
