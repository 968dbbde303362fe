//! # HyperProf Core
//!
//! Core business logic and domain layer for the HyperProf backend.
//! This crate contains domain entities, the bearer token session subsystem,
//! profile and booking services, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Credential, LoginInput, Professor, RevocationRecord, Session, TokenKind};
pub use errors::{DomainError, ErrorKind, TokenError, ValidationError};
pub use repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
pub use services::{
    AccessVerifier, AlunoService, ProfessorService, SessionService, SigningContext, TokenCodec,
    TokenValidator,
};
