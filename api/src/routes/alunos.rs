use actix_web::{web, HttpResponse};

use hp_core::domain::entities::AlunoInput;
use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// POST /api/professores/{id}/alunos
///
/// Books a session with professor `id`. The lesson date must lie in the
/// future; an unknown professor yields 404.
pub async fn book<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    professor_id: web::Path<i64>,
    request: web::Json<AlunoInput>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state
        .alunos
        .book(professor_id.into_inner(), request.into_inner())
        .await
    {
        Ok(aluno) => HttpResponse::Created().json(aluno),
        Err(error) => handle_domain_error(error),
    }
}
