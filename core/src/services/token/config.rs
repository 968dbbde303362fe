//! Signing configuration for the token codec

use std::fmt;

use chrono::Duration;
use hp_shared::config::{JwtConfig, TokenKindConfig, MAX_TOKEN_DURATION_SECONDS};

use crate::domain::entities::token::TokenKind;
use crate::errors::DomainError;

/// Secret and lifetime of one token kind
#[derive(Clone)]
pub struct KindSettings {
    secret: Vec<u8>,
    ttl: Duration,
}

impl KindSettings {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ttl,
        }
    }
}

/// Immutable per-kind signing material, built once at startup.
///
/// Construction fails when a secret is empty, when both kinds share a
/// secret, or when a lifetime is not positive or longer than
/// [`MAX_TOKEN_DURATION_SECONDS`].
#[derive(Clone)]
pub struct SigningContext {
    access: KindSettings,
    refresh: KindSettings,
}

impl SigningContext {
    pub fn new(access: KindSettings, refresh: KindSettings) -> Result<Self, DomainError> {
        for (kind, settings) in [(TokenKind::Access, &access), (TokenKind::Refresh, &refresh)] {
            if settings.secret.is_empty() {
                return Err(DomainError::internal(format!("{} token secret is empty", kind)));
            }
            if settings.ttl <= Duration::zero() {
                return Err(DomainError::internal(format!(
                    "{} token duration must be positive",
                    kind
                )));
            }
            if settings.ttl > Duration::seconds(MAX_TOKEN_DURATION_SECONDS) {
                return Err(DomainError::internal(format!(
                    "{} token duration must be at most {} seconds",
                    kind, MAX_TOKEN_DURATION_SECONDS
                )));
            }
        }
        if access.secret == refresh.secret {
            return Err(DomainError::internal(
                "access and refresh tokens must use different secrets",
            ));
        }
        Ok(Self { access, refresh })
    }

    /// Build from the `TOKEN_*` / `REFRESH_*` configuration section
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        Self::new(
            kind_settings(TokenKind::Access, &config.access)?,
            kind_settings(TokenKind::Refresh, &config.refresh)?,
        )
    }

    pub fn secret(&self, kind: TokenKind) -> &[u8] {
        &self.settings(kind).secret
    }

    pub fn ttl(&self, kind: TokenKind) -> Duration {
        self.settings(kind).ttl
    }

    fn settings(&self, kind: TokenKind) -> &KindSettings {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

/// `Duration::seconds` panics far below `i64::MAX`, so the bound is checked first
fn kind_settings(kind: TokenKind, config: &TokenKindConfig) -> Result<KindSettings, DomainError> {
    if !(1..=MAX_TOKEN_DURATION_SECONDS).contains(&config.duration_seconds) {
        return Err(DomainError::internal(format!(
            "{} token duration must be between 1 and {} seconds",
            kind, MAX_TOKEN_DURATION_SECONDS
        )));
    }
    Ok(KindSettings::new(
        &config.secret,
        Duration::seconds(config.duration_seconds),
    ))
}

impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("access_ttl", &self.access.ttl)
            .field("refresh_ttl", &self.refresh.ttl)
            .finish_non_exhaustive()
    }
}
