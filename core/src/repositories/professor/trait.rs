//! Professor repository trait defining the interface for profile persistence.

use async_trait::async_trait;

use crate::domain::entities::professor::{NewProfessor, Professor};
use crate::errors::DomainError;

/// Repository trait for Professor entity persistence operations
///
/// The email doubles as the identity carried in bearer tokens, so the
/// email-keyed lookups below are what authenticated operations resolve
/// their subject through.
#[async_trait]
pub trait ProfessorRepository: Send + Sync {
    /// List professors, optionally keeping only those whose description
    /// contains `filter` (case-insensitive)
    async fn find_all(&self, filter: Option<&str>) -> Result<Vec<Professor>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, DomainError>;

    /// Find a professor by email, including the stored password hash
    ///
    /// # Example
    /// ```no_run
    /// # use hp_core::repositories::ProfessorRepository;
    /// # async fn example(repo: &impl ProfessorRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("maria@example.com").await? {
    ///     Some(professor) => println!("found {}", professor.nome),
    ///     None => println!("no such professor"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<Professor>, DomainError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Whether another professor (any id but `id`) already uses `email`
    async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, DomainError>;

    /// Insert a professor and return the stored row
    async fn create(&self, professor: NewProfessor) -> Result<Professor, DomainError>;

    /// Replace the profile fields of professor `id` and return the stored row
    async fn update(&self, id: i64, professor: NewProfessor) -> Result<Professor, DomainError>;

    /// Set the profile photo URL of the professor with this email
    async fn update_photo(&self, email: &str, url: &str) -> Result<(), DomainError>;

    /// Delete the professor with this email
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No professor had this email
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
