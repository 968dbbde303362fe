//! Periodic removal of revocation records whose tokens have expired
//!
//! A record only matters while its token could still pass the expiry
//! check, so anything with `expires_at` in the past can be dropped without
//! changing what the validator accepts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hp_shared::config::RevocationCleanupConfig;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RevocationRepository;

use super::clock::Clock;

/// Service for sweeping expired revocation records
pub struct RevocationCleanupService<R: RevocationRepository + 'static> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    config: RevocationCleanupConfig,
}

impl<R: RevocationRepository> RevocationCleanupService<R> {
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, config: RevocationCleanupConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Run a single cleanup cycle
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        let ran_at = self.clock.now();
        if !self.config.enabled {
            return Ok(CleanupResult {
                records_deleted: 0,
                ran_at,
            });
        }

        let records_deleted = self.repository.delete_expired(ran_at).await?;
        info!(records_deleted, "Revocation cleanup completed");

        Ok(CleanupResult {
            records_deleted,
            ran_at,
        })
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when the sweep is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Revocation cleanup is disabled");
            return None;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Revocation cleanup started"
            );
            let mut timer = tokio::time::interval(period);

            loop {
                timer.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "Revocation cleanup cycle failed");
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    pub records_deleted: u64,
    pub ran_at: DateTime<Utc>,
}
