//! Login and registration orchestration
//!
//! The only two operations the gateway handles itself; everything else is
//! forwarded downstream once the filter has admitted it.

use crate::auth::{hash_password, verify_password, Role, TokenIssuer};
use crate::error::AppError;
use crate::users::{User, UserStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Authentication service wired at startup with the credential store and
/// token issuer it depends on.
pub struct AuthService {
    users: UserStore,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(users: UserStore, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    /// Verify credentials and issue a signed token embedding the stored
    /// username and role. No side effects beyond the store read.
    pub async fn authenticate(&self, username: &str, raw_password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(raw_password, &user.password)? {
            warn!("Invalid password for user: {}", username);
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        self.tokens.issue(&user.username, user.role)
    }

    /// Validate, hash, and persist a new account.
    ///
    /// The role defaults to USER when the request carries none; uniqueness of
    /// the username is enforced atomically by the store insert.
    pub async fn register(&self, mut user: User) -> Result<(), AppError> {
        if user.username.trim().is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if user.password.trim().is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        user.password = hash_password(&user.password)?;

        self.users.create(user.clone()).await?;
        info!("Registered new user '{}' with role {}", user.username, user.role);
        Ok(())
    }
}
