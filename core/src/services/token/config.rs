//! Token service configuration

use kg_shared::config::auth::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_DAYS, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
///
/// The secret is fixed for the process lifetime; every token the process
/// issues or accepts is signed and verified with it.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared symmetric signing secret
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry: ACCESS_TOKEN_EXPIRY_DAYS * 86400,
            refresh_token_expiry: REFRESH_TOKEN_EXPIRY_DAYS * 86400,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret and default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            access_token_expiry: jwt.access_token_expiry,
            refresh_token_expiry: jwt.refresh_token_expiry,
        }
    }
}
