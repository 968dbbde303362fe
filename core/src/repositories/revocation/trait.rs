//! Revocation repository trait: the durable set of tokens that must no longer be honored.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::RevocationRecord;
use crate::errors::DomainError;

/// Repository trait for revoked token persistence
///
/// Records are keyed by the SHA-256 fingerprint of the raw token string, so
/// two records for the same token can never coexist.
///
/// # Failure semantics
/// - Lookup faults are returned as errors and must never be reported as
///   "not revoked"; callers reject the token when a lookup fails.
/// - Insert faults are returned as errors; a revocation that was not made
///   durable must fail the operation that requested it.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Check whether a token fingerprint has been revoked
    ///
    /// # Returns
    /// * `Ok(true)` - A record exists for this fingerprint
    /// * `Ok(false)` - No record exists
    /// * `Err(DomainError)` - The store could not answer
    ///
    /// # Example
    /// ```no_run
    /// # use hp_core::repositories::RevocationRepository;
    /// # use hp_core::domain::entities::token::fingerprint;
    /// # async fn example(repo: &impl RevocationRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// if repo.is_revoked(&fingerprint("eyJhbGciOi...")).await? {
    ///     println!("token was revoked");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Record a revocation
    ///
    /// The insert is exclusive per fingerprint: when several callers revoke
    /// the same token concurrently, exactly one of them observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - The record was newly created
    /// * `Ok(false)` - A record for this fingerprint already existed
    /// * `Err(DomainError)` - The record could not be stored
    async fn revoke(&self, record: RevocationRecord) -> Result<bool, DomainError>;

    /// Delete records whose token expired before `now`
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records deleted
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
