//! Application configuration module
//!
//! Handles loading configuration from environment variables.

use std::net::Ipv4Addr;

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
            port: 8082,
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Self {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        Self {
            server: ServerConfig {
                host: std::env::var("HOST")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or_else(|| ServerConfig::default().host),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(|| ServerConfig::default().port),
            },
        }
    }
}
