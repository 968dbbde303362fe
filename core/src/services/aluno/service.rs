//! Aluno booking service

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::entities::aluno::{Aluno, AlunoInput};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{AlunoRepository, ProfessorRepository};
use crate::services::token::Clock;

pub struct AlunoService<P, A>
where
    P: ProfessorRepository,
    A: AlunoRepository,
{
    professors: Arc<P>,
    alunos: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<P, A> AlunoService<P, A>
where
    P: ProfessorRepository,
    A: AlunoRepository,
{
    pub fn new(professors: Arc<P>, alunos: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            professors,
            alunos,
            clock,
        }
    }

    /// Book a session with professor `professor_id`
    ///
    /// # Errors
    /// * `NotFound` - No professor with this id
    /// * `Validation` - Field rules fail or `data_aula` is not in the future
    pub async fn book(&self, professor_id: i64, input: AlunoInput) -> Result<Aluno, DomainError> {
        if !self.professors.exists_by_id(professor_id).await? {
            return Err(DomainError::not_found("Professor"));
        }

        let mut errors = match input.validate() {
            Ok(()) => ValidationError::new(),
            Err(e) => ValidationError::from(e),
        };
        errors.add_if(
            input.data_aula <= self.clock.now(),
            "data_aula",
            "must be in the future",
        );
        errors.into_result()?;

        let aluno = self.alunos.create(input.into_new(professor_id)).await?;
        info!(professor_id, aluno_id = aluno.id, "Aula booked");
        Ok(aluno)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::domain::entities::professor::NewProfessor;
    use crate::errors::ErrorKind;
    use crate::repositories::{MockAlunoRepository, MockProfessorRepository};
    use crate::services::token::ManualClock;

    async fn service() -> (AlunoService<MockProfessorRepository, MockAlunoRepository>, i64, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()));
        let professors = Arc::new(MockProfessorRepository::new());
        let professor = professors
            .create(NewProfessor {
                nome: "Bruno".to_string(),
                email: "bruno@example.com".to_string(),
                idade: 41,
                descricao: "Aulas de violão".to_string(),
                valor_hora: 60.0,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let alunos = Arc::new(MockAlunoRepository::new(professors.clone()));
        (
            AlunoService::new(professors, alunos, clock.clone()),
            professor.id,
            clock,
        )
    }

    fn input(data_aula: chrono::DateTime<Utc>) -> AlunoInput {
        AlunoInput {
            nome: "Carla".to_string(),
            email: "carla@example.com".to_string(),
            data_aula,
        }
    }

    #[tokio::test]
    async fn test_book_in_the_future() {
        let (service, professor_id, clock) = service().await;

        let aluno = service
            .book(professor_id, input(clock.now() + Duration::days(2)))
            .await
            .unwrap();

        assert_eq!(aluno.professor_id, professor_id);
        assert_eq!(aluno.nome, "Carla");
    }

    #[tokio::test]
    async fn test_book_in_the_past_is_rejected() {
        let (service, professor_id, clock) = service().await;

        let err = service
            .book(professor_id, input(clock.now() - Duration::hours(1)))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(v) => assert!(v.fields.contains_key("data_aula")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_book_with_unknown_professor() {
        let (service, _, clock) = service().await;

        let err = service
            .book(999, input(clock.now() + Duration::days(1)))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
