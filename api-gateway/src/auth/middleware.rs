//! Request authentication filter
//!
//! Runs in front of every route. Public routes bypass it entirely; all other
//! routes require a valid bearer token whose role is admitted by the route
//! table. A missing or invalid token yields 401, an insufficient role 403 -
//! the two must never be conflated.

use crate::auth::Role;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::Response,
};

/// Routes that bypass authentication entirely.
const PUBLIC_ROUTES: [&str; 2] = ["/auth/login", "/auth/register"];

/// Authenticate the request and enforce the per-route role requirements,
/// attaching the validated claims for downstream handlers.
pub async fn auth_filter(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if is_public(&path) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let claims = state.tokens.validate(token)?;

    if !route_allows(request.method(), &path, claims.role) {
        return Err(AppError::Forbidden(format!(
            "Route requires ADMIN role, you have {}",
            claims.role
        )));
    }

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Per-route role table. A handful of order/product routes are open to both
/// USER and ADMIN; everything else behind the gateway is ADMIN-only, so the
/// most restrictive rule wins by default.
fn route_allows(method: &Method, path: &str, role: Role) -> bool {
    if user_or_admin_route(method, path) {
        return true;
    }
    role.is_admin()
}

fn user_or_admin_route(method: &Method, path: &str) -> bool {
    (method == Method::POST && path == "/api/order/save")
        || (method == Method::GET && path.starts_with("/api/order/getByOrderId/"))
        || (method == Method::GET && path == "/api/product/viewAllAvailable")
}
