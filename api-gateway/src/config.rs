//! Application configuration module
//!
//! Handles loading and validating configuration from environment variables.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::new(0, 0, 0, 0),
            port: 8080,
        }
    }
}

/// A downstream service reachable through the gateway: requests whose path
/// starts with `prefix` are relayed to `base_url`.
#[derive(Debug, Clone)]
pub struct RouteTarget {
    pub prefix: String,
    pub base_url: String,
}

/// Complete application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub jwt_secret: String,
    pub routes: Vec<RouteTarget>,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        let server = ServerConfig {
            host: std::env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().port),
        };

        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "supplychain-dev-secret-change-in-production".to_string());

        let routes = match std::env::var("GATEWAY_ROUTES") {
            Ok(spec) => Self::parse_routes(&spec)?,
            Err(_) => Self::default_routes(),
        };

        Ok(Self {
            server,
            jwt_secret,
            routes,
        })
    }

    /// Parse a `prefix=url,prefix=url` route table, e.g.
    /// `/api/supplier=http://localhost:8082,/api/order=http://localhost:8083`.
    fn parse_routes(spec: &str) -> Result<Vec<RouteTarget>, ConfigError> {
        spec.split(',')
            .map(|entry| {
                let (prefix, base_url) = entry.trim().split_once('=').ok_or_else(|| {
                    ConfigError::InvalidValue(format!(
                        "GATEWAY_ROUTES entry '{}' is not of the form prefix=url",
                        entry
                    ))
                })?;
                Ok(RouteTarget {
                    prefix: prefix.trim().to_string(),
                    base_url: base_url.trim().trim_end_matches('/').to_string(),
                })
            })
            .collect()
    }

    fn default_routes() -> Vec<RouteTarget> {
        [
            ("/api/supplier", "http://localhost:8082"),
            ("/api/order", "http://localhost:8083"),
            ("/api/product", "http://localhost:8084"),
        ]
        .into_iter()
        .map(|(prefix, base_url)| RouteTarget {
            prefix: prefix.to_string(),
            base_url: base_url.to_string(),
        })
        .collect()
    }
}
