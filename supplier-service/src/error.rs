//! Error handling module
//!
//! Provides the unified error type for the supplier service. All domain
//! failures are raised by the service layer and translated to responses
//! here, at a single boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum SupplierError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("{0}")]
    SupplierNotFound(String),

    #[error("{0}")]
    ReportNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for SupplierError {
    fn from(errors: ValidationErrors) -> Self {
        SupplierError::Validation(errors)
    }
}

/// Error response structure for not-found conditions
#[derive(Serialize)]
pub struct ExceptionResponse {
    pub status: u16,
    pub message: String,
    pub time: DateTime<Utc>,
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        match self {
            SupplierError::Validation(errors) => {
                // One `{timestamp, <field>: <message>}` map for the whole body.
                let mut body = Map::new();
                body.insert("timestamp".to_string(), json!(Utc::now()));
                for (field, field_errors) in errors.field_errors() {
                    if let Some(err) = field_errors.first() {
                        let message = err
                            .message
                            .clone()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field));
                        body.insert(json_field_name(field.as_ref()).to_string(), json!(message));
                    }
                }
                (StatusCode::BAD_REQUEST, Json(Value::Object(body))).into_response()
            }
            // Not-found maps to 406, not 404.
            SupplierError::SupplierNotFound(message) | SupplierError::ReportNotFound(message) => (
                StatusCode::NOT_ACCEPTABLE,
                Json(ExceptionResponse {
                    status: StatusCode::NOT_ACCEPTABLE.as_u16(),
                    message,
                    time: Utc::now(),
                }),
            )
                .into_response(),
            SupplierError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ExceptionResponse {
                        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        message: "An internal error occurred".to_string(),
                        time: Utc::now(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Validation errors are keyed by struct field; clients see the JSON names.
fn json_field_name(field: &str) -> &str {
    match field {
        "supplier_id" => "supplierID",
        "contact_info" => "contactInfo",
        "products_supplied" => "productsSupplied",
        other => other,
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, SupplierError>;
