//! Downstream forwarding
//!
//! Once the filter has admitted a request, any route the gateway does not
//! handle itself is relayed to the downstream service whose configured path
//! prefix matches, preserving method, path, query, headers, and body.

use crate::config::RouteTarget;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::header,
    response::Response,
};
use tracing::{debug, warn};

/// Upper bound on a relayed request body (2 MiB).
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Relays requests to the downstream services behind the gateway.
pub struct ProxyClient {
    client: reqwest::Client,
    routes: Vec<RouteTarget>,
}

impl ProxyClient {
    pub fn new(routes: Vec<RouteTarget>) -> Self {
        Self {
            client: reqwest::Client::new(),
            routes,
        }
    }

    /// Longest matching prefix wins, so `/api/order/report` can be routed
    /// more specifically than `/api/order`.
    fn target_for(&self, path: &str) -> Option<&RouteTarget> {
        self.routes
            .iter()
            .filter(|route| path.starts_with(route.prefix.as_str()))
            .max_by_key(|route| route.prefix.len())
    }

    pub async fn forward(&self, request: Request) -> Result<Response, AppError> {
        let path = request.uri().path().to_string();

        let target = self
            .target_for(&path)
            .ok_or_else(|| AppError::NotFound(format!("No route for path {}", path)))?;

        let mut url = format!("{}{}", target.base_url, path);
        if let Some(query) = request.uri().query() {
            url.push('?');
            url.push_str(query);
        }

        debug!("Forwarding {} {} to {}", request.method(), path, target.base_url);

        let (parts, body) = request.into_parts();
        let body_bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        let mut builder = self.client.request(parts.method, &url);
        for (name, value) in parts.headers.iter() {
            // Host and content-length are recomputed for the new connection;
            // content negotiation stays between gateway and downstream since
            // the relayed body is passed through decoded.
            if name == header::HOST
                || name == header::CONTENT_LENGTH
                || name == header::ACCEPT_ENCODING
            {
                continue;
            }
            builder = builder.header(name, value);
        }

        let downstream = builder
            .body(body_bytes.to_vec())
            .send()
            .await
            .map_err(|e| {
                warn!("Downstream request to {} failed: {}", url, e);
                AppError::BadGateway(format!("Downstream service unreachable: {}", e))
            })?;

        let status = downstream.status();
        let content_type = downstream.headers().get(header::CONTENT_TYPE).cloned();
        let bytes = downstream
            .bytes()
            .await
            .map_err(|e| AppError::BadGateway(format!("Failed to read downstream response: {}", e)))?;

        let mut response = Response::builder().status(status);
        if let Some(content_type) = content_type {
            response = response.header(header::CONTENT_TYPE, content_type);
        }

        response
            .body(Body::from(bytes))
            .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
    }
}

/// Catch-all handler for every route without a local handler.
pub async fn forward_request(
    State(state): State<SharedState>,
    request: Request,
) -> Result<Response, AppError> {
    state.proxy.forward(request).await
}
