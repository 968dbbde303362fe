//! Route table of the `/api` scope

pub mod alunos;
pub mod auth;
pub mod professores;
pub mod uploads;

use actix_web::web;

use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::PhotoStorage;

use crate::middleware::auth::BearerAuth;

/// Register every `/api` route
///
/// The fixed `/professores/*` paths are registered before `/professores/{id}`
/// so they are not captured as ids.
pub fn configure<P, A, R, S>(cfg: &mut web::ServiceConfig)
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login::<P, A, R, S>))
            .route("/refresh", web::post().to(auth::refresh::<P, A, R, S>))
            .route("/logout", web::post().to(auth::logout::<P, A, R, S>)),
    )
    .route(
        "/me",
        web::get()
            .to(professores::me::<P, A, R, S>)
            .wrap(BearerAuth::new()),
    )
    .route(
        "/professores/foto",
        web::post()
            .to(professores::upload_photo::<P, A, R, S>)
            .wrap(BearerAuth::new()),
    )
    .route(
        "/professores/alunos",
        web::get()
            .to(professores::alunos::<P, A, R, S>)
            .wrap(BearerAuth::new()),
    )
    .service(
        web::resource("/professores")
            .route(web::get().to(professores::list::<P, A, R, S>))
            .route(web::post().to(professores::create::<P, A, R, S>))
            .route(
                web::put()
                    .to(professores::update::<P, A, R, S>)
                    .wrap(BearerAuth::new()),
            )
            .route(
                web::delete()
                    .to(professores::delete::<P, A, R, S>)
                    .wrap(BearerAuth::new()),
            ),
    )
    .route("/professores/{id}", web::get().to(professores::get::<P, A, R, S>))
    .route("/professores/{id}/alunos", web::post().to(alunos::book::<P, A, R, S>));
}
