//! User credential store
//!
//! Handles account storage and retrieval.

use crate::auth::Role;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A registered account.
///
/// The password field always holds the bcrypt hash once the account has been
/// persisted; the raw password only exists inside the registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// In-memory credential table keyed by username.
///
/// The write lock makes insert-if-absent atomic, so two concurrent
/// registrations of the same username cannot both succeed.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Persist a new user, failing if the username is already taken.
    pub async fn create(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.username) {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.read().await;
        users.get(username).cloned()
    }
}
