//! Tests for the authentication service flows.

use std::sync::Arc;

use crate::domain::entities::token::TokenKind;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::user_repository::mock::MockUserRepository;
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

fn auth_service() -> (AuthService<MockUserRepository>, Arc<TokenService>) {
    let repo = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(
        "a-long-unit-test-signing-secret",
    )));
    (AuthService::new(repo, tokens.clone()), tokens)
}

#[tokio::test]
async fn register_grants_default_role_and_hashes_password() {
    let (auth, _) = auth_service();

    let user = auth
        .register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();

    assert_eq!(user.username, "ann");
    assert_eq!(user.roles, vec!["USER".to_string()]);
    assert_ne!(user.password_hash, "correct horse battery");
    assert!(bcrypt::verify("correct horse battery", &user.password_hash).unwrap());
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let (auth, _) = auth_service();

    auth.register("ann", "Ann Example", "password-one")
        .await
        .unwrap();
    let result = auth.register("ann", "Another Ann", "password-two").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists { .. }))
    ));
}

#[tokio::test]
async fn login_issues_a_valid_token_pair() {
    let (auth, tokens) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();
    let response = auth.login("ann", "correct horse battery").await.unwrap();

    assert_eq!(response.user.username, "ann");
    assert!(tokens.validate(&response.access_token, TokenKind::Access));
    assert!(tokens.validate(&response.refresh_token, TokenKind::Refresh));
    assert_eq!(
        tokens.extract_user_id(&response.access_token).unwrap(),
        response.user.id
    );
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let (auth, _) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();

    let wrong_password = auth.login("ann", "wrong password").await;
    let unknown_user = auth.login("nobody", "correct horse battery").await;

    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
    assert!(matches!(
        unknown_user,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));
}

#[tokio::test]
async fn refresh_exchanges_a_refresh_token_for_a_new_pair() {
    let (auth, tokens) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();
    let login = auth.login("ann", "correct horse battery").await.unwrap();

    let refreshed = auth.refresh(&login.refresh_token).await.unwrap();

    assert_eq!(refreshed.user.id, login.user.id);
    assert!(tokens.validate(&refreshed.access_token, TokenKind::Access));
    assert!(tokens.validate(&refreshed.refresh_token, TokenKind::Refresh));
}

#[tokio::test]
async fn refresh_rejects_an_access_token() {
    let (auth, _) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();
    let login = auth.login("ann", "correct horse battery").await.unwrap();

    let result = auth.refresh(&login.access_token).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn refresh_rejects_garbage() {
    let (auth, _) = auth_service();

    let result = auth.refresh("not-a-token").await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn authenticate_resolves_the_principal() {
    let (auth, _) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();
    let login = auth.login("ann", "correct horse battery").await.unwrap();

    let user = auth.authenticate(&login.access_token).await.unwrap();

    assert_eq!(user.id, login.user.id);
    assert_eq!(user.username, "ann");
}

#[tokio::test]
async fn authenticate_rejects_a_refresh_token() {
    let (auth, _) = auth_service();

    auth.register("ann", "Ann Example", "correct horse battery")
        .await
        .unwrap();
    let login = auth.login("ann", "correct horse battery").await.unwrap();

    let result = auth.authenticate(&login.refresh_token).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::WrongTokenKind { .. }))
    ));
}

#[tokio::test]
async fn authenticate_fails_for_a_vanished_subject() {
    let repo = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(
        "a-long-unit-test-signing-secret",
    )));
    let auth = AuthService::new(repo, tokens.clone());

    // A correctly signed token whose subject was never stored.
    let ghost = crate::domain::entities::user::User::new("ghost", "Ghost", "hash".to_string());
    let token = tokens.issue_access_token(&ghost).unwrap();

    let result = auth.authenticate(&token).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}
