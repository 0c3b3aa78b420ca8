//! Tests for token issuance and validation.

use crate::domain::entities::token::TokenKind;
use crate::domain::entities::user::User;
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_user() -> User {
    let mut user = User::new("ann", "Ann Example", "$2b$12$hash".to_string());
    user.roles.push("ADMIN".to_string());
    user
}

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("a-long-unit-test-signing-secret"))
}

#[test]
fn access_token_round_trip() {
    let service = service();
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();
    assert!(service.validate(&token, TokenKind::Access));

    let claims = service.check(&token, TokenKind::Access).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.fullname, Some("Ann Example".to_string()));
    assert_eq!(claims.roles, Some("USER, ADMIN".to_string()));
}

#[test]
fn refresh_token_round_trip() {
    let service = service();
    let user = test_user();

    let token = service.issue_refresh_token(&user).unwrap();
    assert!(service.validate(&token, TokenKind::Refresh));

    let claims = service.check(&token, TokenKind::Refresh).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.fullname, None);
    assert_eq!(claims.roles, None);
}

#[test]
fn extracted_subject_matches_user() {
    let service = service();
    let user = test_user();

    let access = service.issue_access_token(&user).unwrap();
    let refresh = service.issue_refresh_token(&user).unwrap();

    assert_eq!(service.extract_user_id(&access).unwrap(), user.id);
    assert_eq!(service.extract_user_id(&refresh).unwrap(), user.id);
}

#[test]
fn kind_mismatch_always_fails() {
    let service = service();
    let user = test_user();

    let access = service.issue_access_token(&user).unwrap();
    let refresh = service.issue_refresh_token(&user).unwrap();

    assert!(!service.validate(&refresh, TokenKind::Access));
    assert!(!service.validate(&access, TokenKind::Refresh));

    assert_eq!(
        service.check(&refresh, TokenKind::Access),
        Err(TokenError::WrongTokenKind {
            expected: TokenKind::Access
        })
    );
    assert_eq!(
        service.check(&access, TokenKind::Refresh),
        Err(TokenError::WrongTokenKind {
            expected: TokenKind::Refresh
        })
    );
}

#[test]
fn foreign_secret_always_fails() {
    let user = test_user();

    let foreign = TokenService::new(TokenServiceConfig::new("a-completely-different-secret"));
    let token = foreign.issue_access_token(&user).unwrap();

    let service = service();
    assert!(!service.validate(&token, TokenKind::Access));
    assert_eq!(
        service.check(&token, TokenKind::Access),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn expired_token_always_fails() {
    let user = test_user();

    // A service whose access lifetime is already in the past mints
    // well-formed, correctly signed, expired tokens.
    let config = TokenServiceConfig {
        access_token_expiry: -3600,
        ..TokenServiceConfig::new("a-long-unit-test-signing-secret")
    };
    let expired_issuer = TokenService::new(config);
    let token = expired_issuer.issue_access_token(&user).unwrap();

    let service = service();
    assert!(!service.validate(&token, TokenKind::Access));
    assert_eq!(
        service.check(&token, TokenKind::Access),
        Err(TokenError::TokenExpired)
    );
}

#[test]
fn malformed_input_is_a_handled_failure() {
    let service = service();
    let user = test_user();

    assert!(!service.validate("", TokenKind::Access));
    assert!(!service.validate("not-a-token", TokenKind::Access));
    assert!(!service.validate("a.b", TokenKind::Access));
    assert!(!service.validate("a.b.c", TokenKind::Refresh));

    let token = service.issue_access_token(&user).unwrap();
    let truncated = &token[..token.len() - 5];
    assert!(!service.validate(truncated, TokenKind::Access));

    assert!(service.extract_user_id("not-a-token").is_err());
    assert!(service.extract_user_id("").is_err());
}

#[test]
fn tampered_payload_fails_validation() {
    let service = service();
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();

    // Flip a character inside the payload segment.
    let mut parts: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
    let payload = parts[1].clone();
    let flipped = if payload.starts_with('A') { "B" } else { "A" };
    parts[1] = format!("{}{}", flipped, &payload[1..]);
    let tampered = parts.join(".");

    assert!(!service.validate(&tampered, TokenKind::Access));
}

#[test]
fn issued_pair_validates_as_both_kinds() {
    let service = service();
    let user = test_user();

    let pair = service.issue_pair(&user).unwrap();

    assert!(service.validate(&pair.access_token, TokenKind::Access));
    assert!(service.validate(&pair.refresh_token, TokenKind::Refresh));
    assert_eq!(pair.expires_in, 3 * 86400);
}
