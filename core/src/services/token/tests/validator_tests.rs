//! Unit tests for token validation policy

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::token::{RevocationRecord, TokenKind};
use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::repositories::{MockRevocationRepository, RevocationRepository};
use crate::services::token::{AccessVerifier, Clock, TokenValidator};

use super::{manual_clock, test_codec};

fn revoke_now(token: &str, kind: TokenKind, clock: &dyn Clock) -> RevocationRecord {
    RevocationRecord::new(token, kind, clock.now() + Duration::hours(1), clock.now())
}

#[tokio::test]
async fn test_fresh_token_validates_to_subject() {
    let clock = manual_clock();
    let codec = test_codec(clock.clone());
    let validator = TokenValidator::new(codec.clone(), Arc::new(MockRevocationRepository::new()));

    let token = codec.mint("alice@example.com", TokenKind::Access).unwrap();

    assert_eq!(validator.authenticate(&token).await.unwrap(), "alice@example.com");
}

#[tokio::test]
async fn test_expiry_boundary() {
    let clock = manual_clock();
    let codec = test_codec(clock.clone());
    let validator = TokenValidator::new(codec.clone(), Arc::new(MockRevocationRepository::new()));
    let token = codec.mint("alice@example.com", TokenKind::Access).unwrap();

    // Exactly at expiry is still valid
    clock.advance(Duration::seconds(60));
    assert!(validator.validate(&token, TokenKind::Access).await.is_ok());

    clock.advance(Duration::seconds(1));
    let err = validator.validate(&token, TokenKind::Access).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Expired);
}

#[tokio::test]
async fn test_expired_wins_over_revoked() {
    let clock = manual_clock();
    let codec = test_codec(clock.clone());
    let revocations = Arc::new(MockRevocationRepository::new());
    let validator = TokenValidator::new(codec.clone(), revocations.clone());
    let token = codec.mint("alice@example.com", TokenKind::Access).unwrap();

    revocations
        .revoke(revoke_now(&token, TokenKind::Access, clock.as_ref()))
        .await
        .unwrap();
    clock.advance(Duration::minutes(5));

    let err = validator.validate(&token, TokenKind::Access).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_revoked_token_is_rejected() {
    let clock = manual_clock();
    let codec = test_codec(clock.clone());
    let revocations = Arc::new(MockRevocationRepository::new());
    let validator = TokenValidator::new(codec.clone(), revocations.clone());
    let token = codec.mint("alice@example.com", TokenKind::Refresh).unwrap();

    revocations
        .revoke(revoke_now(&token, TokenKind::Refresh, clock.as_ref()))
        .await
        .unwrap();

    let err = validator.validate(&token, TokenKind::Refresh).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Revoked);
}

#[tokio::test]
async fn test_malformed_token_never_reaches_the_store() {
    let codec = test_codec(manual_clock());
    let revocations = Arc::new(MockRevocationRepository::new());
    // A lookup would fail; a malformed token must be rejected before that
    revocations.set_fail_lookups(true);
    let validator = TokenValidator::new(codec, revocations);

    let err = validator.validate("garbage", TokenKind::Access).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[tokio::test]
async fn test_lookup_failure_fails_closed() {
    let codec = test_codec(manual_clock());
    let revocations = Arc::new(MockRevocationRepository::new());
    let validator = TokenValidator::new(codec.clone(), revocations.clone());
    let token = codec.mint("alice@example.com", TokenKind::Access).unwrap();

    revocations.set_fail_lookups(true);

    let err = validator.validate(&token, TokenKind::Access).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
}

#[tokio::test]
async fn test_kinds_are_not_interchangeable() {
    let codec = test_codec(manual_clock());
    let validator = TokenValidator::new(codec.clone(), Arc::new(MockRevocationRepository::new()));
    let access = codec.mint("alice@example.com", TokenKind::Access).unwrap();
    let refresh = codec.mint("alice@example.com", TokenKind::Refresh).unwrap();

    assert_eq!(
        validator.validate(&refresh, TokenKind::Access).await.unwrap_err().kind(),
        ErrorKind::InvalidToken
    );
    assert_eq!(
        validator.validate(&access, TokenKind::Refresh).await.unwrap_err().kind(),
        ErrorKind::InvalidToken
    );
}

#[tokio::test]
async fn test_access_verifier_trait_object() {
    let codec = test_codec(manual_clock());
    let validator = TokenValidator::new(codec.clone(), Arc::new(MockRevocationRepository::new()));
    let verifier: Arc<dyn AccessVerifier> = Arc::new(validator);

    let token = codec.mint("dave@example.com", TokenKind::Access).unwrap();
    let credential = verifier.verify_access(&token).await.unwrap();
    assert_eq!(credential.subject, "dave@example.com");
}

#[tokio::test]
async fn test_one_second_token_expires_after_two_seconds() {
    use crate::services::token::{KindSettings, SigningContext, SystemClock, TokenCodec};

    let codec = Arc::new(TokenCodec::new(
        SigningContext::new(
            KindSettings::new("short-access", Duration::seconds(1)),
            KindSettings::new("short-refresh", Duration::seconds(1)),
        )
        .unwrap(),
        Arc::new(SystemClock),
    ));
    let validator = TokenValidator::new(codec.clone(), Arc::new(MockRevocationRepository::new()));
    let token = codec.mint("alice@example.com", TokenKind::Access).unwrap();

    assert_eq!(validator.authenticate(&token).await.unwrap(), "alice@example.com");

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let err = validator.authenticate(&token).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Expired);
}
