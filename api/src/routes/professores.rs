//! Professor profile handlers
//!
//! Listing and lookup are public; every handler taking an `AuthContext` acts
//! on the profile of the authenticated professor.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use hp_core::domain::entities::ProfessorInput;
use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::app::AppState;
use crate::dto::auth::MessageResponse;
use crate::dto::professor::{read_photo_form, SearchQuery};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// GET /api/professores?q=
pub async fn list<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.list(query.q.as_deref()).await {
        Ok(professores) => HttpResponse::Ok().json(professores),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/professores/{id}
pub async fn get<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    id: web::Path<i64>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.get(id.into_inner()).await {
        Ok(professor) => HttpResponse::Ok().json(professor),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/professores
pub async fn create<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    request: web::Json<ProfessorInput>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.create(request.into_inner()).await {
        Ok(professor) => HttpResponse::Created().json(professor),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/professores
pub async fn update<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    auth: AuthContext,
    request: web::Json<ProfessorInput>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.update(&auth.subject, request.into_inner()).await {
        Ok(professor) => HttpResponse::Ok().json(professor),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/professores
pub async fn delete<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    auth: AuthContext,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.delete(&auth.subject).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/professores/foto
///
/// `multipart/form-data` with the image in the `foto` part.
pub async fn upload_photo<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    auth: AuthContext,
    form: Multipart,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    let upload = match read_photo_form(form).await {
        Ok(upload) => upload,
        Err(error) => return handle_domain_error(error.into()),
    };

    match state.professors.update_photo(&auth.subject, upload).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Foto atualizada com sucesso")),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/professores/alunos
pub async fn alunos<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    auth: AuthContext,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.alunos(&auth.subject).await {
        Ok(alunos) => HttpResponse::Ok().json(alunos),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/me
pub async fn me<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    auth: AuthContext,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.professors.me(&auth.subject).await {
        Ok(professor) => HttpResponse::Ok().json(professor),
        Err(error) => handle_domain_error(error),
    }
}
