//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signing algorithm shared by both token kinds
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// Service minting and verifying the two classes of bearer token
///
/// Issuance and validation are pure in-memory computation over the
/// immutable signing secret, so one instance is freely shared across
/// request-handling tasks without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and token lifetimes
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = true;
        // An expiration in the past must always fail, however recent.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for a user
    ///
    /// The token embeds the display name and the comma-joined role list
    /// alongside the subject, and expires after the configured access
    /// lifetime.
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(user, Duration::seconds(self.config.access_token_expiry));
        self.encode_jwt(&claims)
    }

    /// Issues a refresh token for a user
    ///
    /// Refresh tokens carry only the subject and the discriminator, and
    /// expire after the configured refresh lifetime.
    pub fn issue_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        let claims =
            Claims::new_refresh_token(user, Duration::seconds(self.config.refresh_token_expiry));
        self.encode_jwt(&claims)
    }

    /// Issues an access + refresh token pair for a user
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        Ok(TokenPair::new(
            self.issue_access_token(user)?,
            self.issue_refresh_token(user)?,
            self.config.access_token_expiry,
        ))
    }

    /// Verifies a token and checks it is of the expected kind
    ///
    /// This is the typed boundary: callers that need the failure cause
    /// (the refresh flow, diagnostics, tests) get the full [`TokenError`]
    /// taxonomy instead of a collapsed boolean.
    pub fn check(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;

        if claims.kind() != expected {
            return Err(TokenError::WrongTokenKind { expected });
        }

        Ok(claims)
    }

    /// Verifies a token against an expected kind, collapsing every
    /// failure to `false`
    ///
    /// The failure cause is classified and logged before it is
    /// discarded; the caller-visible contract is binary and this method
    /// never propagates an error.
    pub fn validate(&self, token: &str, expected: TokenKind) -> bool {
        match self.check(token, expected) {
            Ok(_) => true,
            Err(err) => {
                match err {
                    TokenError::InvalidSignature => {
                        tracing::info!("token signature rejected: {}", err)
                    }
                    TokenError::InvalidTokenFormat => tracing::info!("malformed token: {}", err),
                    TokenError::TokenExpired => tracing::info!("expired token: {}", err),
                    TokenError::UnsupportedAlgorithm => {
                        tracing::info!("unsupported token algorithm: {}", err)
                    }
                    TokenError::InvalidClaims => {
                        tracing::info!("incomplete token claims: {}", err)
                    }
                    TokenError::WrongTokenKind { .. } => {
                        tracing::info!("token kind mismatch: {}", err)
                    }
                    _ => tracing::info!("token rejected: {}", err),
                }
                false
            }
        }
    }

    /// Returns the subject of a verified token as a structured identifier
    ///
    /// Assumes prior successful validation; a malformed or forged token
    /// fails here with the underlying token error.
    pub fn extract_user_id(&self, token: &str) -> Result<Uuid, DomainError> {
        let claims = self.decode(token).map_err(DomainError::Token)?;
        claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))
    }

    /// Encodes claims into a compact signed JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(SIGNING_ALGORITHM);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and verifies a compact JWT, mapping the library error
    /// kinds onto the internal taxonomy
    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        use jsonwebtoken::errors::ErrorKind;

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnsupportedAlgorithm
                }
                ErrorKind::MissingRequiredClaim(_) | ErrorKind::Json(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            })
    }
}
