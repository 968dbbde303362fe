//! MySQL implementations of the core repository traits.

mod aluno_repository_impl;
mod professor_repository_impl;
mod revocation_repository_impl;

pub use aluno_repository_impl::MySqlAlunoRepository;
pub use professor_repository_impl::MySqlProfessorRepository;
pub use revocation_repository_impl::MySqlRevocationRepository;

use crate::InfrastructureError;

/// Read a column, reporting the column name when decoding fails
pub(crate) fn column<'r, T>(
    row: &'r sqlx::mysql::MySqlRow,
    name: &str,
) -> Result<T, InfrastructureError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    use sqlx::Row;
    row.try_get(name)
        .map_err(|e| InfrastructureError::Mapping(format!("Failed to get {}: {}", name, e)))
}
