//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{TokenError, ValidationError};

use thiserror::Error;

/// Coarse classification of every failure the domain can produce.
///
/// Transport layers match on this exhaustively to pick a status code, so
/// adding a variant forces every mapping to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Signature mismatch, malformed structure, wrong kind or stale subject
    InvalidToken,
    /// Current time is past the token's expiry
    Expired,
    /// Token string is present in the revocation store
    Revoked,
    /// Identity proof mismatch at login
    BadCredentials,
    /// Addressed resource does not exist
    NotFound,
    /// Caller input failed field rules
    Validation,
    /// Storage, signing or I/O fault not attributable to caller input
    Application,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Invalid credentials")]
    BadCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Token(err) => err.kind(),
            DomainError::BadCredentials => ErrorKind::BadCredentials,
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Storage { .. } | DomainError::Internal { .. } => ErrorKind::Application,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
