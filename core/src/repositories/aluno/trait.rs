//! Aluno repository trait for booked sessions.

use async_trait::async_trait;

use crate::domain::entities::aluno::{Aluno, NewAluno};
use crate::errors::DomainError;

#[async_trait]
pub trait AlunoRepository: Send + Sync {
    /// Insert a booking and return the stored row
    async fn create(&self, aluno: NewAluno) -> Result<Aluno, DomainError>;

    /// All bookings of the professor with this email
    async fn find_by_professor_email(&self, email: &str) -> Result<Vec<Aluno>, DomainError>;

    /// Delete every booking of the professor with this email, returning how many went
    async fn delete_by_professor_email(&self, email: &str) -> Result<u64, DomainError>;
}
