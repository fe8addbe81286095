//! Application state management
//!
//! Contains shared state accessible across all handlers. Every collaborator
//! is constructed here, at startup, with its dependencies passed in.

use crate::auth::{AuthService, TokenIssuer};
use crate::config::Settings;
use crate::proxy::ProxyClient;
use crate::users::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Login/registration orchestration
    pub auth: AuthService,

    /// Token issuer, shared with the request filter
    pub tokens: Arc<TokenIssuer>,

    /// Forwarding client for the downstream services
    pub proxy: ProxyClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let tokens = Arc::new(TokenIssuer::new(&settings.jwt_secret));

        Self {
            auth: AuthService::new(UserStore::new(), Arc::clone(&tokens)),
            tokens,
            proxy: ProxyClient::new(settings.routes.clone()),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
