//! In-memory implementation of RevocationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::{fingerprint, RevocationRecord};
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

/// Mock revocation repository with switchable storage faults
#[derive(Default)]
pub struct MockRevocationRepository {
    records: Arc<RwLock<HashMap<String, RevocationRecord>>>,
    fail_lookups: AtomicBool,
    fail_inserts: AtomicBool,
}

impl MockRevocationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `is_revoked` call return a storage error
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Make every `revoke` call return a storage error
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Whether a record exists for this raw token
    pub async fn contains_token(&self, token: &str) -> bool {
        self.records.read().await.contains_key(&fingerprint(token))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::storage("revocation lookup failed"));
        }
        Ok(self.records.read().await.contains_key(token_hash))
    }

    async fn revoke(&self, record: RevocationRecord) -> Result<bool, DomainError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::storage("revocation insert failed"));
        }
        // Check and insert under one write lock, like a unique key
        let mut records = self.records.write().await;
        if records.contains_key(&record.token_hash) {
            return Ok(false);
        }
        records.insert(record.token_hash.clone(), record);
        Ok(true)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at >= now);
        Ok((before - records.len()) as u64)
    }
}
