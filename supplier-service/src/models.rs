//! Supplier domain models
//!
//! The supplier entity plus the transient report types. Field constraints
//! live here; handlers invoke `validate()` before any business logic runs.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Names may not contain digits.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[^0-9]*$").expect("valid regex"));

/// A supplier record. The ID is caller-supplied, not generated; saving an
/// existing ID replaces the record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "supplierID")]
    #[validate(range(min = 1, message = "ID must be greater than or equal to 1"))]
    pub supplier_id: i32,

    #[validate(
        length(min = 5, max = 20, message = "Name must be between 5 and 20 character"),
        regex(path = *NAME_PATTERN, message = "Name must not contain numbers"),
        custom(function = name_not_blank)
    )]
    pub name: String,

    #[validate(range(
        min = 1_000_000_000i64,
        max = 9_999_999_999i64,
        message = "Contact number must be 10 digits"
    ))]
    pub contact_info: i64,

    #[validate(custom(function = products_not_blank))]
    pub products_supplied: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub date: NaiveDateTime,
}

/// Date range for a report lookup, both ends inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierReport {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Row shape handed to the reporting consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierReportEntry {
    pub name: String,
    pub products_supplied: String,
    pub date: NaiveDateTime,
}

impl From<&Supplier> for SupplierReportEntry {
    fn from(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            products_supplied: supplier.products_supplied.clone(),
            date: supplier.date,
        }
    }
}

fn name_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Name is mandatory field".into());
        return Err(err);
    }
    Ok(())
}

fn products_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Product supplied is mandatory field".into());
        return Err(err);
    }
    Ok(())
}
