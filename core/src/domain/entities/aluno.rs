//! Aluno entity: a client booking a session with a professor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A booked session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aluno {
    pub id: i64,

    #[serde(skip_serializing, default)]
    pub professor_id: i64,

    pub nome: String,
    pub email: String,
    pub data_aula: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking fields submitted by the client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlunoInput {
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    pub nome: String,

    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub email: String,

    pub data_aula: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAluno {
    pub professor_id: i64,
    pub nome: String,
    pub email: String,
    pub data_aula: DateTime<Utc>,
}

impl AlunoInput {
    pub fn into_new(self, professor_id: i64) -> NewAluno {
        NewAluno {
            professor_id,
            nome: self.nome,
            email: self.email,
            data_aula: self.data_aula,
        }
    }
}
