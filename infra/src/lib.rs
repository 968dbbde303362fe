//! # Infrastructure Layer
//!
//! Concrete implementations of the repository and storage traits defined in
//! `hp_core`:
//! - **Database**: MySQL repositories using SQLx, each call bounded by a deadline
//! - **Storage**: profile photos written to the local filesystem

use hp_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Storage module - local disk photo storage
pub mod storage;

pub use database::{
    DatabasePool, MySqlAlunoRepository, MySqlProfessorRepository, MySqlRevocationRepository,
};
pub use storage::LocalDiskStorage;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A storage call exceeded its deadline
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Row could not be mapped onto a domain type
    #[error("Row mapping error: {0}")]
    Mapping(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}
