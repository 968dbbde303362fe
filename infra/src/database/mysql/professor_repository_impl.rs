//! MySQL implementation of the ProfessorRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::MySqlPool;
use std::time::Duration;

use hp_core::domain::entities::professor::{NewProfessor, Professor};
use hp_core::errors::DomainError;
use hp_core::repositories::ProfessorRepository;

use super::column;
use crate::database::{with_deadline, DatabasePool};
use crate::InfrastructureError;

const COLUMNS: &str =
    "id, nome, email, idade, descricao, valor_hora, foto_perfil, password, created_at, updated_at";

/// MySQL implementation of ProfessorRepository
pub struct MySqlProfessorRepository {
    pool: MySqlPool,
    query_timeout: Duration,
}

impl MySqlProfessorRepository {
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.get_pool().clone(),
            query_timeout: db.query_timeout(),
        }
    }

    fn row_to_professor(row: &MySqlRow) -> Result<Professor, InfrastructureError> {
        Ok(Professor {
            id: column(row, "id")?,
            nome: column(row, "nome")?,
            email: column(row, "email")?,
            idade: column(row, "idade")?,
            descricao: column(row, "descricao")?,
            valor_hora: column(row, "valor_hora")?,
            foto_perfil: column(row, "foto_perfil")?,
            password_hash: column(row, "password")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn exists(
        &self,
        operation: &'static str,
        query: sqlx::query::Query<'_, sqlx::MySql, MySqlArguments>,
    ) -> Result<bool, DomainError> {
        let row =
            with_deadline(self.query_timeout, operation, query.fetch_optional(&self.pool)).await?;
        Ok(row.is_some())
    }
}

/// Escape LIKE wildcards so the filter matches literally
pub(crate) fn escape_like(filter: &str) -> String {
    let mut escaped = String::with_capacity(filter.len());
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl ProfessorRepository for MySqlProfessorRepository {
    async fn find_all(&self, filter: Option<&str>) -> Result<Vec<Professor>, DomainError> {
        let rows = match filter {
            Some(filter) => {
                let sql = format!(
                    "SELECT {} FROM professores WHERE LOWER(descricao) LIKE CONCAT('%', LOWER(?), '%') ORDER BY id",
                    COLUMNS
                );
                with_deadline(
                    self.query_timeout,
                    "professor_search",
                    sqlx::query(&sql).bind(escape_like(filter)).fetch_all(&self.pool),
                )
                .await?
            }
            None => {
                let sql = format!("SELECT {} FROM professores ORDER BY id", COLUMNS);
                with_deadline(
                    self.query_timeout,
                    "professor_list",
                    sqlx::query(&sql).fetch_all(&self.pool),
                )
                .await?
            }
        };

        rows.iter()
            .map(|row| Self::row_to_professor(row).map_err(DomainError::from))
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, DomainError> {
        let sql = format!("SELECT {} FROM professores WHERE id = ?", COLUMNS);
        let row = with_deadline(
            self.query_timeout,
            "professor_find_by_id",
            sqlx::query(&sql).bind(id).fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.as_ref().map(Self::row_to_professor).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Professor>, DomainError> {
        let sql = format!("SELECT {} FROM professores WHERE email = ?", COLUMNS);
        let row = with_deadline(
            self.query_timeout,
            "professor_find_by_email",
            sqlx::query(&sql).bind(email).fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.as_ref().map(Self::row_to_professor).transpose()?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        self.exists(
            "professor_exists_by_id",
            sqlx::query("SELECT 1 FROM professores WHERE id = ? LIMIT 1").bind(id),
        )
        .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists(
            "professor_exists_by_email",
            sqlx::query("SELECT 1 FROM professores WHERE email = ? LIMIT 1").bind(email),
        )
        .await
    }

    async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, DomainError> {
        self.exists(
            "professor_exists_by_email_excluding",
            sqlx::query("SELECT 1 FROM professores WHERE email = ? AND id <> ? LIMIT 1")
                .bind(email)
                .bind(id),
        )
        .await
    }

    async fn create(&self, professor: NewProfessor) -> Result<Professor, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "professor_create",
            sqlx::query(
                r#"
                INSERT INTO professores (nome, email, idade, descricao, valor_hora, password)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&professor.nome)
            .bind(&professor.email)
            .bind(professor.idade)
            .bind(&professor.descricao)
            .bind(professor.valor_hora)
            .bind(&professor.password_hash)
            .execute(&self.pool),
        )
        .await?;

        let id = result.last_insert_id() as i64;
        tracing::info!(professor_id = id, "Professor created");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::internal("Inserted professor could not be read back"))
    }

    async fn update(&self, id: i64, professor: NewProfessor) -> Result<Professor, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "professor_update",
            sqlx::query(
                r#"
                UPDATE professores
                SET nome = ?, email = ?, idade = ?, descricao = ?, valor_hora = ?, password = ?
                WHERE id = ?
                "#,
            )
            .bind(&professor.nome)
            .bind(&professor.email)
            .bind(professor.idade)
            .bind(&professor.descricao)
            .bind(professor.valor_hora)
            .bind(&professor.password_hash)
            .bind(id)
            .execute(&self.pool),
        )
        .await?;

        // MySQL reports changed rows, so an identical update still needs the read below
        if result.rows_affected() == 0 && !self.exists_by_id(id).await? {
            return Err(DomainError::not_found("Professor"));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Professor"))
    }

    async fn update_photo(&self, email: &str, url: &str) -> Result<(), DomainError> {
        with_deadline(
            self.query_timeout,
            "professor_update_photo",
            sqlx::query("UPDATE professores SET foto_perfil = ? WHERE email = ?")
                .bind(url)
                .bind(email)
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let result = with_deadline(
            self.query_timeout,
            "professor_delete",
            sqlx::query("DELETE FROM professores WHERE email = ?")
                .bind(email)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
