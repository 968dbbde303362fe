//! Error type definitions for token handling and input validation

use std::collections::BTreeMap;

use thiserror::Error;

use super::ErrorKind;

/// Token-related errors
///
/// Every variant rejects the presented token; the split exists for
/// diagnostics and for choosing the error code returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing bearer token")]
    Missing,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,

    #[error("Token subject no longer exists")]
    StaleSubject,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::Missing
            | TokenError::InvalidSignature
            | TokenError::Malformed { .. }
            | TokenError::StaleSubject => ErrorKind::InvalidToken,
            TokenError::Expired => ErrorKind::Expired,
            TokenError::Revoked => ErrorKind::Revoked,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        TokenError::Malformed {
            reason: reason.into(),
        }
    }
}

/// Input validation failure carrying every failed rule per field
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self {
            message: String::from("Validation failed"),
            fields: BTreeMap::new(),
        }
    }

    /// Shorthand for a failure on a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    /// A failure not tied to any field, such as an unreadable body
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_if(&mut self, condition: bool, field: &str, message: &str) {
        if condition {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok` when no rule failed
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = ValidationError::new();
        for (field, failures) in errors.field_errors() {
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}
