//! MySQL implementation of the RevocationRepository trait.
//!
//! Revoked tokens are stored by fingerprint in `revoked_tokens`. The primary
//! key on `token_hash` makes the insert the single arbitration point between
//! concurrent revocations of the same token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use std::time::Duration;

use hp_core::domain::entities::token::RevocationRecord;
use hp_core::errors::DomainError;
use hp_core::repositories::RevocationRepository;

use crate::database::{with_deadline, DatabasePool};
use crate::InfrastructureError;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    pool: MySqlPool,
    query_timeout: Duration,
}

impl MySqlRevocationRepository {
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.get_pool().clone(),
            query_timeout: db.query_timeout(),
        }
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            "revocation_lookup",
            sqlx::query("SELECT 1 FROM revoked_tokens WHERE token_hash = ? LIMIT 1")
                .bind(token_hash)
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.is_some())
    }

    async fn revoke(&self, record: RevocationRecord) -> Result<bool, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "revocation_insert",
            sqlx::query(
                r#"
                INSERT INTO revoked_tokens (token_hash, token_kind, expires_at, revoked_at)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&record.token_hash)
            .bind(record.kind.as_str())
            .bind(record.expires_at)
            .bind(record.revoked_at)
            .execute(&self.pool),
        )
        .await;

        match result {
            Ok(_) => {
                tracing::debug!(token = record.short_hash(), kind = %record.kind, "Token revoked");
                Ok(true)
            }
            Err(InfrastructureError::Database(sqlx::Error::Database(ref db)))
                if db.is_unique_violation() =>
            {
                tracing::debug!(token = record.short_hash(), "Token already revoked");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "revocation_cleanup",
            sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
                .bind(now)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected())
    }
}
