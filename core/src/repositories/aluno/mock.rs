//! In-memory implementation of AlunoRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::aluno::{Aluno, NewAluno};
use crate::errors::DomainError;
use crate::repositories::professor::{MockProfessorRepository, ProfessorRepository};

use super::r#trait::AlunoRepository;

/// Mock aluno repository; resolves professor emails through a mock professor store
pub struct MockAlunoRepository {
    alunos: Arc<RwLock<Vec<Aluno>>>,
    professors: Arc<MockProfessorRepository>,
    next_id: AtomicI64,
}

impl MockAlunoRepository {
    pub fn new(professors: Arc<MockProfessorRepository>) -> Self {
        Self {
            alunos: Arc::new(RwLock::new(Vec::new())),
            professors,
            next_id: AtomicI64::new(1),
        }
    }

    async fn professor_id(&self, email: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.professors.find_by_email(email).await?.map(|p| p.id))
    }
}

#[async_trait]
impl AlunoRepository for MockAlunoRepository {
    async fn create(&self, aluno: NewAluno) -> Result<Aluno, DomainError> {
        let now = Utc::now();
        let stored = Aluno {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            professor_id: aluno.professor_id,
            nome: aluno.nome,
            email: aluno.email,
            data_aula: aluno.data_aula,
            created_at: now,
            updated_at: now,
        };
        self.alunos.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_professor_email(&self, email: &str) -> Result<Vec<Aluno>, DomainError> {
        let Some(professor_id) = self.professor_id(email).await? else {
            return Ok(Vec::new());
        };
        Ok(self
            .alunos
            .read()
            .await
            .iter()
            .filter(|a| a.professor_id == professor_id)
            .cloned()
            .collect())
    }

    async fn delete_by_professor_email(&self, email: &str) -> Result<u64, DomainError> {
        let Some(professor_id) = self.professor_id(email).await? else {
            return Ok(0);
        };
        let mut alunos = self.alunos.write().await;
        let before = alunos.len();
        alunos.retain(|a| a.professor_id != professor_id);
        Ok((before - alunos.len()) as u64)
    }
}
