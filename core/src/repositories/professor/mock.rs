//! In-memory implementation of ProfessorRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::professor::{NewProfessor, Professor};
use crate::errors::DomainError;

use super::r#trait::ProfessorRepository;

pub struct MockProfessorRepository {
    professors: Arc<RwLock<Vec<Professor>>>,
    next_id: AtomicI64,
    fail_all: AtomicBool,
}

impl MockProfessorRepository {
    pub fn new() -> Self {
        Self {
            professors: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
            fail_all: AtomicBool::new(false),
        }
    }

    /// Make every call return a storage error
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_all.load(Ordering::SeqCst) {
            Err(DomainError::storage("professor store unavailable"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockProfessorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfessorRepository for MockProfessorRepository {
    async fn find_all(&self, filter: Option<&str>) -> Result<Vec<Professor>, DomainError> {
        self.check()?;
        let professors = self.professors.read().await;
        let needle = filter.map(str::to_lowercase);
        Ok(professors
            .iter()
            .filter(|p| match &needle {
                Some(q) => p.descricao.to_lowercase().contains(q),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, DomainError> {
        self.check()?;
        Ok(self.professors.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Professor>, DomainError> {
        self.check()?;
        Ok(self
            .professors
            .read()
            .await
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn exists_by_email_excluding(&self, email: &str, id: i64) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self
            .professors
            .read()
            .await
            .iter()
            .any(|p| p.email == email && p.id != id))
    }

    async fn create(&self, professor: NewProfessor) -> Result<Professor, DomainError> {
        self.check()?;
        let mut professors = self.professors.write().await;
        if professors.iter().any(|p| p.email == professor.email) {
            return Err(DomainError::storage("duplicate email"));
        }
        let now = Utc::now();
        let stored = Professor {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            nome: professor.nome,
            email: professor.email,
            idade: professor.idade,
            descricao: professor.descricao,
            valor_hora: professor.valor_hora,
            foto_perfil: None,
            password_hash: professor.password_hash,
            created_at: now,
            updated_at: now,
        };
        professors.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, professor: NewProfessor) -> Result<Professor, DomainError> {
        self.check()?;
        let mut professors = self.professors.write().await;
        let existing = professors
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found("Professor"))?;
        existing.nome = professor.nome;
        existing.email = professor.email;
        existing.idade = professor.idade;
        existing.descricao = professor.descricao;
        existing.valor_hora = professor.valor_hora;
        existing.password_hash = professor.password_hash;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn update_photo(&self, email: &str, url: &str) -> Result<(), DomainError> {
        self.check()?;
        let mut professors = self.professors.write().await;
        if let Some(existing) = professors.iter_mut().find(|p| p.email == email) {
            existing.foto_perfil = Some(url.to_string());
            existing.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.check()?;
        let mut professors = self.professors.write().await;
        let before = professors.len();
        professors.retain(|p| p.email != email);
        Ok(professors.len() < before)
    }
}
