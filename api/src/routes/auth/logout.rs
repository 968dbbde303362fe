use actix_web::{web, HttpRequest, HttpResponse};

use hp_core::errors::{DomainError, TokenError};
use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::app::AppState;
use crate::dto::auth::RefreshRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::bearer_token;

/// Handler for POST /api/auth/logout
///
/// Revokes the access token from the Authorization header together with the
/// refresh token from the body. The access token is not validated first, so
/// an expired session can still be closed.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
/// - 205 Reset Content on success
/// - 400 Bad Request: `refresh_token` missing
/// - 401 Unauthorized: Missing header or unreadable refresh token
pub async fn logout<P, A, R, S>(
    req: HttpRequest,
    state: web::Data<AppState<P, A, R, S>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    let access_token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => return handle_domain_error(DomainError::from(TokenError::Missing)),
    };

    match state.sessions.logout(access_token, &request.refresh_token).await {
        Ok(()) => HttpResponse::ResetContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
