//! Business services containing domain logic and use cases.

pub mod aluno;
pub mod password;
pub mod photo;
pub mod professor;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use aluno::AlunoService;
pub use password::PasswordHasher;
pub use photo::{PhotoStorage, PhotoUpload, MAX_PHOTO_BYTES};
pub use professor::ProfessorService;
pub use session::SessionService;
pub use token::{
    AccessVerifier, CleanupResult, Clock, KindSettings, RevocationCleanupService,
    SigningContext, SystemClock, TokenCodec, TokenValidator,
};
