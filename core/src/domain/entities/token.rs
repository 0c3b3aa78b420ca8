//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Access token expiration time (3 days)
pub const ACCESS_TOKEN_EXPIRY_DAYS: i64 = 3;

/// Refresh token expiration time (10 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 10;

/// The two classes of bearer token
///
/// Both kinds share one claim schema and one signing secret; they are
/// told apart solely by the `refresh` discriminator claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived credential authorizing API requests
    Access,
    /// Longer-lived credential used solely to mint a new access token
    Refresh,
}

impl TokenKind {
    /// Value the `refresh` discriminator claim carries for this kind
    pub fn is_refresh(self) -> bool {
        matches!(self, TokenKind::Refresh)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Kind discriminator: `true` for refresh tokens
    pub refresh: bool,

    /// Display name, embedded in access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    /// Comma-joined role list, embedded in access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user` - The user the token is bound to
    /// * `ttl` - Lifetime of the token from now
    pub fn new_access_token(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            refresh: false,
            fullname: Some(user.full_name.clone()),
            roles: Some(user.joined_roles()),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// Refresh tokens carry no denormalized user claims, only the
    /// subject and the discriminator.
    pub fn new_refresh_token(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            refresh: true,
            fullname: None,
            roles: None,
        }
    }

    /// Token kind encoded by the discriminator claim
    pub fn kind(&self) -> TokenKind {
        if self.refresh {
            TokenKind::Refresh
        } else {
            TokenKind::Access
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        let mut user = User::new("ann", "Ann Example", "$2b$12$hash".to_string());
        user.roles.push("ADMIN".to_string());
        user
    }

    #[test]
    fn test_access_token_claims() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, Duration::days(ACCESS_TOKEN_EXPIRY_DAYS));

        assert_eq!(claims.sub, user.id.to_string());
        assert!(!claims.refresh);
        assert_eq!(claims.kind(), TokenKind::Access);
        assert_eq!(claims.fullname, Some("Ann Example".to_string()));
        assert_eq!(claims.roles, Some("USER, ADMIN".to_string()));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims() {
        let user = test_user();
        let claims = Claims::new_refresh_token(&user, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));

        assert_eq!(claims.sub, user.id.to_string());
        assert!(claims.refresh);
        assert_eq!(claims.kind(), TokenKind::Refresh);
        assert_eq!(claims.fullname, None);
        assert_eq!(claims.roles, None);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, Duration::days(1));

        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[test]
    fn test_claims_expiration() {
        let user = test_user();
        let mut claims = Claims::new_access_token(&user, Duration::days(1));

        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_serialization_omits_absent_claims() {
        let user = test_user();
        let claims = Claims::new_refresh_token(&user, Duration::days(1));

        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"refresh\":true"));
        assert!(!json.contains("fullname"));
        assert!(!json.contains("roles"));
    }

    #[test]
    fn test_claims_round_trip() {
        let user = test_user();
        let claims = Claims::new_access_token(&user, Duration::days(1));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new("access.jwt".to_string(), "refresh.jwt".to_string(), 259_200);

        assert_eq!(pair.access_token, "access.jwt");
        assert_eq!(pair.refresh_token, "refresh.jwt");
        assert_eq!(pair.expires_in, 259_200);
    }
}
