use actix_web::{web, HttpResponse};

use hp_core::domain::value_objects::LoginInput;
use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::app::AppState;
use crate::dto::auth::TokenResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "maria@example.com", "password": "secret123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ...", "refresh_token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Field rules failed
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    request: web::Json<LoginInput>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.sessions.login(request.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(TokenResponse::from(session)),
        Err(error) => handle_domain_error(error),
    }
}
