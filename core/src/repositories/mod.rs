pub mod aluno;
pub mod professor;
pub mod revocation;

pub use aluno::AlunoRepository;
pub use professor::ProfessorRepository;
pub use revocation::RevocationRepository;

#[cfg(any(test, feature = "mocks"))]
pub use aluno::MockAlunoRepository;
#[cfg(any(test, feature = "mocks"))]
pub use professor::MockProfessorRepository;
#[cfg(any(test, feature = "mocks"))]
pub use revocation::MockRevocationRepository;
