//! Domain entities representing core business objects.

pub mod aluno;
pub mod professor;
pub mod token;

// Re-export commonly used types
pub use aluno::{Aluno, AlunoInput, NewAluno};
pub use professor::{NewProfessor, Professor, ProfessorInput};
pub use token::{fingerprint, Credential, RevocationRecord, TokenKind};
