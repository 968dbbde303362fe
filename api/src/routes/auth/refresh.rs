use actix_web::{web, HttpResponse};

use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::app::AppState;
use crate::dto::auth::{RefreshRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/auth/refresh
///
/// Exchanges a refresh token for a new token pair. The presented refresh
/// token is revoked, so replaying it fails with 401 `TOKEN_REVOKED`.
///
/// # Request Body
///
/// ```json
/// { "refresh_token": "eyJ..." }
/// ```
pub async fn refresh<P, A, R, S>(
    state: web::Data<AppState<P, A, R, S>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    match state.sessions.refresh(&request.refresh_token).await {
        Ok(session) => HttpResponse::Ok().json(TokenResponse::from(session)),
        Err(error) => handle_domain_error(error),
    }
}
