//! Professor service implementation
//!
//! Operations taking a `subject` act on the professor identified by an
//! already validated access token.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::entities::aluno::Aluno;
use crate::domain::entities::professor::{Professor, ProfessorInput};
use crate::errors::{DomainError, TokenError, ValidationError};
use crate::repositories::{AlunoRepository, ProfessorRepository};
use crate::services::password::PasswordHasher;
use crate::services::photo::{PhotoStorage, PhotoUpload};

pub struct ProfessorService<P, A, S>
where
    P: ProfessorRepository,
    A: AlunoRepository,
    S: PhotoStorage,
{
    professors: Arc<P>,
    alunos: Arc<A>,
    storage: Arc<S>,
    hasher: PasswordHasher,
}

impl<P, A, S> ProfessorService<P, A, S>
where
    P: ProfessorRepository,
    A: AlunoRepository,
    S: PhotoStorage,
{
    pub fn new(professors: Arc<P>, alunos: Arc<A>, storage: Arc<S>, hasher: PasswordHasher) -> Self {
        Self {
            professors,
            alunos,
            storage,
            hasher,
        }
    }

    /// List professors, optionally filtered by a description search term
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<Professor>, DomainError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        self.professors.find_all(query).await
    }

    pub async fn get(&self, id: i64) -> Result<Professor, DomainError> {
        self.professors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Professor"))
    }

    /// Profile of the authenticated professor
    pub async fn me(&self, subject: &str) -> Result<Professor, DomainError> {
        self.professors
            .find_by_email(subject)
            .await?
            .ok_or_else(|| TokenError::StaleSubject.into())
    }

    pub async fn create(&self, input: ProfessorInput) -> Result<Professor, DomainError> {
        let mut errors = field_errors(&input);
        errors.add_if(
            self.professors.exists_by_email(&input.email).await?,
            "email",
            "is already in use",
        );
        errors.into_result()?;

        let password_hash = self.hasher.hash(&input.password).await?;
        let professor = self.professors.create(input.into_new(password_hash)).await?;
        info!(professor_id = professor.id, "Professor created");
        Ok(professor)
    }

    pub async fn update(&self, subject: &str, input: ProfessorInput) -> Result<Professor, DomainError> {
        let current = self.me(subject).await?;

        let mut errors = field_errors(&input);
        errors.add_if(
            self.professors
                .exists_by_email_excluding(&input.email, current.id)
                .await?,
            "email",
            "is already in use",
        );
        errors.into_result()?;

        let password_hash = self.hasher.hash(&input.password).await?;
        let professor = self
            .professors
            .update(current.id, input.into_new(password_hash))
            .await?;
        info!(professor_id = professor.id, "Professor updated");
        Ok(professor)
    }

    /// Delete the authenticated professor together with their bookings
    pub async fn delete(&self, subject: &str) -> Result<(), DomainError> {
        let current = self.me(subject).await?;
        let removed = self.alunos.delete_by_professor_email(subject).await?;
        self.professors.delete_by_email(subject).await?;
        info!(professor_id = current.id, alunos_removed = removed, "Professor deleted");
        Ok(())
    }

    /// Store a new profile photo and point the profile at it
    pub async fn update_photo(&self, subject: &str, upload: PhotoUpload) -> Result<String, DomainError> {
        let current = self.me(subject).await?;
        upload.validate()?;

        let url = self.storage.store(&upload).await?;
        self.professors.update_photo(subject, &url).await?;
        info!(professor_id = current.id, "Profile photo updated");
        Ok(url)
    }

    /// Bookings of the authenticated professor
    pub async fn alunos(&self, subject: &str) -> Result<Vec<Aluno>, DomainError> {
        self.me(subject).await?;
        self.alunos.find_by_professor_email(subject).await
    }
}

fn field_errors(input: &ProfessorInput) -> ValidationError {
    match input.validate() {
        Ok(()) => ValidationError::new(),
        Err(e) => ValidationError::from(e),
    }
}
