//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    Aluno, AlunoInput, Credential, NewAluno, NewProfessor, Professor, ProfessorInput,
    RevocationRecord, TokenKind,
};
pub use value_objects::{LoginInput, Session};
