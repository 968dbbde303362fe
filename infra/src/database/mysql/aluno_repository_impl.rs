//! MySQL implementation of the AlunoRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use std::time::Duration;

use hp_core::domain::entities::aluno::{Aluno, NewAluno};
use hp_core::errors::DomainError;
use hp_core::repositories::AlunoRepository;

use super::column;
use crate::database::{with_deadline, DatabasePool};
use crate::InfrastructureError;

/// MySQL implementation of AlunoRepository
pub struct MySqlAlunoRepository {
    pool: MySqlPool,
    query_timeout: Duration,
}

impl MySqlAlunoRepository {
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.get_pool().clone(),
            query_timeout: db.query_timeout(),
        }
    }

    fn row_to_aluno(row: &MySqlRow) -> Result<Aluno, InfrastructureError> {
        Ok(Aluno {
            id: column(row, "id")?,
            professor_id: column(row, "professor_id")?,
            nome: column(row, "nome")?,
            email: column(row, "email")?,
            data_aula: column(row, "data_aula")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl AlunoRepository for MySqlAlunoRepository {
    async fn create(&self, aluno: NewAluno) -> Result<Aluno, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "aluno_create",
            sqlx::query(
                r#"
                INSERT INTO alunos (professor_id, nome, email, data_aula)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(aluno.professor_id)
            .bind(&aluno.nome)
            .bind(&aluno.email)
            .bind(aluno.data_aula)
            .execute(&self.pool),
        )
        .await?;

        let id = result.last_insert_id() as i64;
        let row = with_deadline(
            self.query_timeout,
            "aluno_find_by_id",
            sqlx::query(
                "SELECT id, professor_id, nome, email, data_aula, created_at, updated_at FROM alunos WHERE id = ?",
            )
            .bind(id)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(Self::row_to_aluno(&row)?)
    }

    async fn find_by_professor_email(&self, email: &str) -> Result<Vec<Aluno>, DomainError> {
        let rows = with_deadline(
            self.query_timeout,
            "aluno_find_by_professor",
            sqlx::query(
                r#"
                SELECT a.id, a.professor_id, a.nome, a.email, a.data_aula, a.created_at, a.updated_at
                FROM alunos a
                JOIN professores p ON p.id = a.professor_id
                WHERE p.email = ?
                ORDER BY a.data_aula
                "#,
            )
            .bind(email)
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter()
            .map(|row| Self::row_to_aluno(row).map_err(DomainError::from))
            .collect()
    }

    async fn delete_by_professor_email(&self, email: &str) -> Result<u64, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "aluno_delete_by_professor",
            sqlx::query(
                r#"
                DELETE a FROM alunos a
                JOIN professores p ON p.id = a.professor_id
                WHERE p.email = ?
                "#,
            )
            .bind(email)
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected())
    }
}
