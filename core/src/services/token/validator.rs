//! Decides whether a presented token currently authorizes its subject

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::entities::token::{fingerprint, Credential, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationRepository;

use super::codec::TokenCodec;

/// Codec + revocation store + clock.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. signature and structure for the expected kind (`InvalidToken`)
/// 2. expiry, strictly past `exp` (`Expired`)
/// 3. revocation lookup (`Revoked`); a failed lookup rejects the token
pub struct TokenValidator<R: RevocationRepository> {
    codec: Arc<TokenCodec>,
    revocations: Arc<R>,
}

impl<R: RevocationRepository> Clone for TokenValidator<R> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
            revocations: Arc::clone(&self.revocations),
        }
    }
}

impl<R: RevocationRepository> TokenValidator<R> {
    pub fn new(codec: Arc<TokenCodec>, revocations: Arc<R>) -> Self {
        Self { codec, revocations }
    }

    pub async fn validate(&self, token: &str, kind: TokenKind) -> Result<Credential, DomainError> {
        let credential = self.codec.decode(token, kind).map_err(|e| {
            debug!(kind = %kind, reason = %e, "Rejected token with invalid structure");
            e
        })?;

        if credential.is_expired_at(self.codec.clock().now()) {
            debug!(kind = %kind, subject = %credential.subject, "Rejected expired token");
            return Err(TokenError::Expired.into());
        }

        let revoked = self
            .revocations
            .is_revoked(&fingerprint(token))
            .await
            .map_err(|e| {
                error!(kind = %kind, error = %e, "Revocation lookup failed, rejecting token");
                e
            })?;
        if revoked {
            warn!(kind = %kind, subject = %credential.subject, "Revoked token presented");
            return Err(TokenError::Revoked.into());
        }

        Ok(credential)
    }

    /// Validate an access token and return its subject
    pub async fn authenticate(&self, token: &str) -> Result<String, DomainError> {
        Ok(self.validate(token, TokenKind::Access).await?.subject)
    }

    pub fn codec(&self) -> &Arc<TokenCodec> {
        &self.codec
    }
}

/// Object-safe access token check for the HTTP middleware
#[async_trait]
pub trait AccessVerifier: Send + Sync {
    async fn verify_access(&self, token: &str) -> Result<Credential, DomainError>;
}

#[async_trait]
impl<R: RevocationRepository + 'static> AccessVerifier for TokenValidator<R> {
    async fn verify_access(&self, token: &str) -> Result<Credential, DomainError> {
        self.validate(token, TokenKind::Access).await
    }
}
