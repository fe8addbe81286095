//! JWT token management
//!
//! Issues and validates the stateless bearer tokens carried on every
//! protected request.

use crate::auth::Role;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token expiration (1 hour)
const TOKEN_EXPIRATION_MINUTES: i64 = 60;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// User role
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Signs and validates bearer tokens.
///
/// Constructed once at startup from the configured secret and shared through
/// application state; holds no per-token state of its own.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a signed token embedding the subject and role.
    pub fn issue(&self, username: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            role,
            exp: (now + Duration::minutes(TOKEN_EXPIRATION_MINUTES)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify signature and expiry.
    ///
    /// Malformed, expired, and mis-signed tokens all collapse to
    /// `Unauthorized`; the filter does not distinguish between them.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token expired".to_string())
                }
                _ => AppError::Unauthorized("Invalid token".to_string()),
            })
    }
}
