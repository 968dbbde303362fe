//! Unit tests for the revocation sweep

use std::sync::Arc;

use chrono::Duration;
use hp_shared::config::RevocationCleanupConfig;

use crate::domain::entities::token::{RevocationRecord, TokenKind};
use crate::repositories::{MockRevocationRepository, RevocationRepository};
use crate::services::token::{Clock, RevocationCleanupService};

use super::manual_clock;

#[tokio::test]
async fn test_cleanup_removes_only_expired_records() {
    let clock = manual_clock();
    let repo = Arc::new(MockRevocationRepository::new());
    let now = clock.now();

    repo.revoke(RevocationRecord::new("old", TokenKind::Access, now - Duration::minutes(1), now))
        .await
        .unwrap();
    repo.revoke(RevocationRecord::new("live", TokenKind::Refresh, now + Duration::hours(1), now))
        .await
        .unwrap();

    let service = RevocationCleanupService::new(
        repo.clone(),
        clock.clone(),
        RevocationCleanupConfig::default(),
    );
    let result = service.run_cleanup().await.unwrap();

    assert_eq!(result.records_deleted, 1);
    assert_eq!(result.ran_at, now);
    assert!(!repo.contains_token("old").await);
    assert!(repo.contains_token("live").await);
}

#[tokio::test]
async fn test_disabled_cleanup_deletes_nothing() {
    let clock = manual_clock();
    let repo = Arc::new(MockRevocationRepository::new());
    let now = clock.now();
    repo.revoke(RevocationRecord::new("old", TokenKind::Access, now - Duration::days(1), now))
        .await
        .unwrap();

    let service = Arc::new(RevocationCleanupService::new(
        repo.clone(),
        clock,
        RevocationCleanupConfig {
            enabled: false,
            interval_seconds: 60,
        },
    ));

    assert_eq!(service.run_cleanup().await.unwrap().records_deleted, 0);
    assert!(service.start_background_task().is_none());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_background_task_runs_first_sweep_immediately() {
    let clock = manual_clock();
    let repo = Arc::new(MockRevocationRepository::new());
    let now = clock.now();
    repo.revoke(RevocationRecord::new("old", TokenKind::Access, now - Duration::days(1), now))
        .await
        .unwrap();

    let service = Arc::new(RevocationCleanupService::new(
        repo.clone(),
        clock,
        RevocationCleanupConfig {
            enabled: true,
            interval_seconds: 3600,
        },
    ));
    let handle = service.start_background_task().unwrap();

    for _ in 0..50 {
        if repo.is_empty().await {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    handle.abort();

    assert!(repo.is_empty().await);
}
