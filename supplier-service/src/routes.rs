//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod supplier;

use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(build_cors_layer())
        .propagate_x_request_id();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Supplier routes
        .route("/api/supplier/add", post(supplier::save_supplier_info))
        .route(
            "/api/supplier/supplierInfoById/{id}",
            get(supplier::get_supplier_info),
        )
        .route(
            "/api/supplier/viewAllSupplier",
            get(supplier::get_all_supplier),
        )
        .route(
            "/api/supplier/supplierInfoByDateForReport",
            post(supplier::get_supplier_info_for_report),
        )
        .layer(middleware)
        .with_state(state)
}

/// Build the CORS layer: any origin (mirrored per request), with credentials.
/// `tower-http` rejects a literal wildcard combined with credentials, so the
/// request origin is echoed back instead.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
