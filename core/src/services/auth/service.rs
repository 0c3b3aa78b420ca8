//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenKind;
use crate::domain::entities::user::User;
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Service for account registration and credential/token authentication
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new auth service instance
    ///
    /// # Arguments
    ///
    /// * `user_repository` - The user directory collaborator
    /// * `token_service` - The token service sharing the process secret
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Registers a new user
    ///
    /// Rejects duplicate usernames; the password is stored as a bcrypt
    /// hash and the default role is granted.
    pub async fn register(
        &self,
        username: &str,
        full_name: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists {
                username: username.to_string(),
            }
            .into());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
            DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            }
        })?;

        let user = User::new(username, full_name, password_hash);
        let created = self.user_repository.create(user).await?;

        tracing::info!(username = %created.username, "registered new user");
        Ok(created)
    }

    /// Authenticates a username/password pair and issues a token pair
    ///
    /// Unknown usernames and wrong passwords collapse to the same
    /// failure; a caller cannot probe which of the two it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, DomainError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {}", e),
            })?;
        if !matches {
            tracing::info!(username, "login rejected: bad credentials");
            return Err(AuthError::AuthenticationFailed.into());
        }

        let pair = self.token_service.issue_pair(&user)?;
        Ok(AuthResponse::from_token_pair(pair, user))
    }

    /// Exchanges a valid refresh token for a fresh token pair
    ///
    /// The presented string must verify as a *refresh* token; an access
    /// token is rejected here by the kind discriminator.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, DomainError> {
        if let Err(err) = self.token_service.check(refresh_token, TokenKind::Refresh) {
            tracing::info!("refresh rejected: {}", err);
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let user_id = self.token_service.extract_user_id(refresh_token)?;
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let pair = self.token_service.issue_pair(&user)?;
        Ok(AuthResponse::from_token_pair(pair, user))
    }

    /// Resolves a bearer access token to its principal
    ///
    /// The request gate calls this once per credentialed request. The
    /// presented string must verify as an *access* token; the subject is
    /// then hydrated from the user directory.
    pub async fn authenticate(&self, access_token: &str) -> Result<User, DomainError> {
        let claims = self
            .token_service
            .check(access_token, TokenKind::Access)
            .map_err(DomainError::Token)?;

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user)
    }
}
