//! Domain-specific error types for authentication and token operations
//!
//! Each error carries a stable code consumed by the wire-level error
//! envelope in `kg_shared`.

use kg_shared::types::response::{error_codes, ErrorResponse};
use thiserror::Error;

use crate::domain::entities::token::TokenKind;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username and wrong password collapse to this one variant
    /// so a caller cannot probe which of the two it was.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists: {username}")]
    UserAlreadyExists { username: String },
}

impl AuthError {
    /// Stable error code for the wire envelope
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AuthenticationFailed => error_codes::AUTHENTICATION_FAILED,
            AuthError::UserNotFound => error_codes::USER_NOT_FOUND,
            AuthError::UserAlreadyExists { .. } => error_codes::USER_ALREADY_EXISTS,
        }
    }
}

/// Token-related errors
///
/// The full taxonomy exists for diagnostics; `TokenService::validate`
/// collapses it to a boolean at the caller boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unsupported signing algorithm")]
    UnsupportedAlgorithm,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Wrong token kind: expected {expected} token")]
    WrongTokenKind { expected: TokenKind },

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Stable error code for the wire envelope
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat => error_codes::INVALID_TOKEN_FORMAT,
            TokenError::InvalidSignature => error_codes::INVALID_SIGNATURE,
            TokenError::UnsupportedAlgorithm => error_codes::UNSUPPORTED_ALGORITHM,
            TokenError::InvalidClaims => error_codes::INVALID_CLAIMS,
            TokenError::WrongTokenKind { .. } => error_codes::WRONG_TOKEN_KIND,
            TokenError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
            TokenError::TokenGenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_conversion() {
        let error = TokenError::TokenExpired;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert!(response.message.contains("Token expired"));
    }

    #[test]
    fn test_wrong_kind_message_names_expectation() {
        let error = TokenError::WrongTokenKind {
            expected: TokenKind::Access,
        };
        assert!(error.to_string().contains("access"));
        assert_eq!(error.code(), error_codes::WRONG_TOKEN_KIND);
    }

    #[test]
    fn test_auth_error_conversion() {
        let error = AuthError::UserAlreadyExists {
            username: "ann".to_string(),
        };
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "USER_ALREADY_EXISTS");
        assert!(response.message.contains("ann"));
    }
}
