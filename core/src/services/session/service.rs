//! Session service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use validator::Validate;

use crate::domain::entities::token::{RevocationRecord, TokenKind};
use crate::domain::value_objects::session::{LoginInput, Session};
use crate::errors::{DomainError, TokenError, ValidationError};
use crate::repositories::{ProfessorRepository, RevocationRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenCodec, TokenValidator};

/// Orchestrates the subject-facing session operations
pub struct SessionService<P, R>
where
    P: ProfessorRepository,
    R: RevocationRepository,
{
    professors: Arc<P>,
    revocations: Arc<R>,
    codec: Arc<TokenCodec>,
    validator: TokenValidator<R>,
    hasher: PasswordHasher,
}

impl<P, R> SessionService<P, R>
where
    P: ProfessorRepository,
    R: RevocationRepository,
{
    pub fn new(
        professors: Arc<P>,
        revocations: Arc<R>,
        codec: Arc<TokenCodec>,
        hasher: PasswordHasher,
    ) -> Self {
        let validator = TokenValidator::new(Arc::clone(&codec), Arc::clone(&revocations));
        Self {
            professors,
            revocations,
            codec,
            validator,
            hasher,
        }
    }

    pub fn validator(&self) -> &TokenValidator<R> {
        &self.validator
    }

    /// Verify an email/password pair and mint a session for it
    ///
    /// # Errors
    /// * `Validation` - Fields fail their length rules
    /// * `BadCredentials` - Unknown email or wrong password
    /// * `Storage` - The profile store could not be queried
    pub async fn login(&self, input: LoginInput) -> Result<Session, DomainError> {
        input.validate().map_err(ValidationError::from)?;

        let professor = match self.professors.find_by_email(&input.email).await? {
            Some(professor) => professor,
            None => {
                warn!("Login attempt for unknown email");
                return Err(DomainError::BadCredentials);
            }
        };

        if !self.hasher.verify(&input.password, &professor.password_hash).await? {
            warn!(subject = %professor.email, "Login attempt with wrong password");
            return Err(DomainError::BadCredentials);
        }

        let session = self.mint_session(&professor.email)?;
        info!(subject = %session.subject, "Login succeeded");
        Ok(session)
    }

    /// Redeem a refresh token for a new pair, revoking it in the process
    ///
    /// The old token is recorded as revoked before anything is minted. The
    /// store's insert is exclusive per token, so when two callers race with
    /// the same token only one gets past the insert; the other sees `Revoked`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, DomainError> {
        if refresh_token.trim().is_empty() {
            return Err(ValidationError::field("refresh_token", "is required").into());
        }

        let credential = self.validator.validate(refresh_token, TokenKind::Refresh).await?;

        if !self.professors.exists_by_email(&credential.subject).await? {
            warn!(subject = %credential.subject, "Refresh for a subject that no longer exists");
            return Err(TokenError::StaleSubject.into());
        }

        let record = RevocationRecord::new(
            refresh_token,
            TokenKind::Refresh,
            credential.expires_at,
            self.codec.clock().now(),
        );
        let short_hash = record.short_hash().to_string();
        if !self.revocations.revoke(record).await? {
            warn!(subject = %credential.subject, token = %short_hash, "Refresh token already redeemed");
            return Err(TokenError::Revoked.into());
        }

        let session = self.mint_session(&credential.subject)?;
        info!(subject = %session.subject, rotated = %short_hash, "Refresh token rotated");
        Ok(session)
    }

    /// Revoke both tokens of a session
    ///
    /// The refresh token must be a structurally valid refresh token; it may
    /// already be expired or revoked, so repeating a logout succeeds. The
    /// access token is revoked whatever its state.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> Result<(), DomainError> {
        if refresh_token.trim().is_empty() {
            return Err(ValidationError::field("refresh_token", "is required").into());
        }

        let refresh = self.codec.decode(refresh_token, TokenKind::Refresh)?;
        let now = self.codec.clock().now();

        // Refresh record first so its expiry is the one kept for the token
        self.revocations
            .revoke(RevocationRecord::new(refresh_token, TokenKind::Refresh, refresh.expires_at, now))
            .await?;

        if access_token != refresh_token {
            let access_expiry = self.access_record_expiry(access_token, now);
            self.revocations
                .revoke(RevocationRecord::new(access_token, TokenKind::Access, access_expiry, now))
                .await?;
        }

        info!(subject = %refresh.subject, "Logout succeeded");
        Ok(())
    }

    /// Expiry stored for a revoked access-slot token
    ///
    /// A token that decodes under either kind keeps its own `exp`. Anything
    /// else must outlive every token it could be, so it gets the longer TTL.
    fn access_record_expiry(&self, token: &str, now: DateTime<Utc>) -> DateTime<Utc> {
        self.codec
            .decode(token, TokenKind::Access)
            .or_else(|_| self.codec.decode(token, TokenKind::Refresh))
            .map(|credential| credential.expires_at)
            .unwrap_or_else(|_| {
                let longest = self
                    .codec
                    .ttl(TokenKind::Access)
                    .max(self.codec.ttl(TokenKind::Refresh));
                now + longest
            })
    }

    fn mint_session(&self, subject: &str) -> Result<Session, DomainError> {
        let access_token = self.codec.mint(subject, TokenKind::Access)?;
        let refresh_token = self.codec.mint(subject, TokenKind::Refresh)?;
        Ok(Session::new(subject, access_token, refresh_token))
    }
}
