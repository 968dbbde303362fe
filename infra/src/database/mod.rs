//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and idempotent schema setup
//! - Repository implementations for professores, alunos and revoked tokens
//! - A deadline wrapper applied to every storage call

pub mod connection;
pub mod mysql;


use std::future::Future;
use std::time::Duration;

use crate::InfrastructureError;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAlunoRepository, MySqlProfessorRepository, MySqlRevocationRepository};

/// Run a database future, failing with `Timeout` once `limit` elapses
pub(crate) async fn with_deadline<T, F>(
    limit: Duration,
    operation: &'static str,
    fut: F,
) -> Result<T, InfrastructureError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::error!(operation, error = %e, "Database call failed");
            Err(InfrastructureError::Database(e))
        }
        Err(_) => {
            tracing::error!(operation, timeout_secs = limit.as_secs(), "Database call timed out");
            Err(InfrastructureError::Timeout {
                operation,
                seconds: limit.as_secs(),
            })
        }
    }
}
