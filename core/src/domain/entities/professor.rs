//! Professor entity: a service provider offering paid sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered professor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub idade: i32,
    pub descricao: String,
    pub valor_hora: f64,

    /// Public URL of the uploaded profile photo
    pub foto_perfil: Option<String>,

    /// bcrypt hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields submitted on create and update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProfessorInput {
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    pub nome: String,

    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub email: String,

    #[validate(range(min = 18, max = 100, message = "must be between 18 and 100"))]
    pub idade: i32,

    #[validate(length(min = 10, max = 500, message = "must be between 10 and 500 characters"))]
    pub descricao: String,

    #[validate(range(min = 10.0, max = 500.0, message = "must be between 10 and 500"))]
    pub valor_hora: f64,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "must match password"))]
    pub password_confirmation: String,
}

/// Row data ready to be written; the password is already hashed
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfessor {
    pub nome: String,
    pub email: String,
    pub idade: i32,
    pub descricao: String,
    pub valor_hora: f64,
    pub password_hash: String,
}

impl ProfessorInput {
    pub fn into_new(self, password_hash: String) -> NewProfessor {
        NewProfessor {
            nome: self.nome,
            email: self.email,
            idade: self.idade,
            descricao: self.descricao,
            valor_hora: self.valor_hora,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfessorInput {
        ProfessorInput {
            nome: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            idade: 34,
            descricao: "Aulas de matemática para o ensino médio".to_string(),
            valor_hora: 80.0,
            password: "segredo123".to_string(),
            password_confirmation: "segredo123".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_field_rules() {
        let bad = ProfessorInput {
            nome: "Jo".to_string(),
            idade: 17,
            descricao: "curta".to_string(),
            valor_hora: 5.0,
            password_confirmation: "outra".to_string(),
            ..input()
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["nome", "idade", "descricao", "valor_hora", "password_confirmation"] {
            assert!(fields.contains_key(field), "expected an error on {}", field);
        }
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let now = Utc::now();
        let professor = Professor {
            id: 1,
            nome: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            idade: 34,
            descricao: "Aulas de matemática".to_string(),
            valor_hora: 80.0,
            foto_perfil: None,
            password_hash: "$2b$12$secret".to_string(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&professor).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json["foto_perfil"].is_null());
    }
}
