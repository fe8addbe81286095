//! Authentication route handlers
//!
//! Provides the login and register endpoints. Both are public; everything
//! the handlers do beyond deserialization is delegated to the auth service.

use crate::error::AppError;
use crate::state::SharedState;
use crate::users::User;
use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login
///
/// Authenticate with username and password; the body of the 200 response is
/// the bearer token itself.
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<String, AppError> {
    info!("Login attempt for user: {}", req.username);
    let token = state.auth.authenticate(&req.username, &req.password).await?;
    Ok(token)
}

/// POST /auth/register
///
/// Register a new account. New users get the USER role unless the request
/// names one.
pub async fn register(
    State(state): State<SharedState>,
    Json(user): Json<User>,
) -> Result<String, AppError> {
    info!("Registration request for user: {}", user.username);
    state.auth.register(user).await?;
    Ok("Registration Is Done!!".to_string())
}
