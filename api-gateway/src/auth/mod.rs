//! Authentication and authorization module
//!
//! Provides JWT-based authentication and role-based access control.

mod jwt;
mod middleware;
mod password;
mod service;

pub use jwt::{Claims, TokenIssuer};
pub use middleware::auth_filter;
pub use password::{hash_password, verify_password};
pub use service::AuthService;

use serde::{Deserialize, Serialize};

/// User roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular account, limited to the order and product endpoints
    User,
    /// Full access to every route behind the gateway
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}
