//! Token entities for JWT-based authentication.

use std::fmt;

use chrono::serde::ts_seconds;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// The two kinds of bearer token; each is signed with its own secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token authorizing ordinary requests
    Access,
    /// Longer-lived token redeemable once for a new pair
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenKind::Access),
            "refresh" => Ok(TokenKind::Refresh),
            other => Err(format!("unknown token kind: {}", other)),
        }
    }
}

/// Logical content of one signed token.
///
/// Serialized as the JWT claim set: `sub`, `typ`, `iat`, `exp` and `jti`.
/// Timestamps carry whole seconds, so a decoded credential compares equal
/// to the one that was minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Identity the token speaks for (a professor's email)
    #[serde(rename = "sub")]
    pub subject: String,

    #[serde(rename = "typ")]
    pub kind: TokenKind,

    #[serde(rename = "iat", with = "ts_seconds")]
    pub issued_at: DateTime<Utc>,

    #[serde(rename = "exp", with = "ts_seconds")]
    pub expires_at: DateTime<Utc>,

    /// Random id; keeps two tokens minted in the same second distinct
    #[serde(rename = "jti")]
    pub token_id: String,
}

impl Credential {
    /// Creates a credential valid for `ttl` from `issued_at`, truncated to seconds
    pub fn new(
        subject: impl Into<String>,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let issued_at = DateTime::from_timestamp(issued_at.timestamp(), 0).unwrap_or(issued_at);
        Self {
            subject: subject.into(),
            kind,
            issued_at,
            expires_at: issued_at + ttl,
            token_id: Uuid::new_v4().to_string(),
        }
    }

    /// Strictly past expiry; a token checked exactly at `expires_at` is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// SHA-256 hex digest of a raw token string, used as the revocation key
pub fn fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Proof that a signed token must no longer be honored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRecord {
    /// Fingerprint of the raw token string
    pub token_hash: String,

    pub kind: TokenKind,

    /// Expiry of the revoked token; the record is useless after this instant
    pub expires_at: DateTime<Utc>,

    pub revoked_at: DateTime<Utc>,
}

impl RevocationRecord {
    pub fn new(
        token: &str,
        kind: TokenKind,
        expires_at: DateTime<Utc>,
        revoked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token_hash: fingerprint(token),
            kind,
            expires_at,
            revoked_at,
        }
    }

    /// Abbreviated fingerprint suitable for log lines
    pub fn short_hash(&self) -> &str {
        &self.token_hash[..self.token_hash.len().min(12)]
    }
}
