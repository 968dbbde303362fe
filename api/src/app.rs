//! Application state and factory
//!
//! This module holds the services shared by every worker and builds the
//! Actix-web application around them.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpRequest, HttpResponse,
};
use std::sync::Arc;

use hp_core::errors::DomainError;
use hp_core::repositories::{AlunoRepository, ProfessorRepository, RevocationRepository};
use hp_core::services::{
    token::AccessVerifier, AlunoService, PhotoStorage, ProfessorService, SessionService,
};
use hp_infra::storage::LocalDiskStorage;
use hp_shared::config::{Environment, ServerConfig};

use crate::handlers::error::{
    handle_domain_error, json_error_handler, path_error_handler, query_error_handler,
};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Services shared by all request handlers
pub struct AppState<P, A, R, S>
where
    P: ProfessorRepository,
    A: AlunoRepository,
    R: RevocationRepository,
    S: PhotoStorage,
{
    pub sessions: Arc<SessionService<P, R>>,
    pub professors: Arc<ProfessorService<P, A, S>>,
    pub alunos: Arc<AlunoService<P, A>>,
}

impl<P, A, R, S> AppState<P, A, R, S>
where
    P: ProfessorRepository,
    A: AlunoRepository,
    R: RevocationRepository + 'static,
    S: PhotoStorage,
{
    pub fn new(
        sessions: Arc<SessionService<P, R>>,
        professors: Arc<ProfessorService<P, A, S>>,
        alunos: Arc<AlunoService<P, A>>,
    ) -> Self {
        Self {
            sessions,
            professors,
            alunos,
        }
    }

    /// Access-token check used by the bearer middleware
    pub fn verifier(&self) -> Arc<dyn AccessVerifier> {
        Arc::new(self.sessions.validator().clone())
    }
}

/// Deployment-dependent parts of the application
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub environment: Environment,
    pub server: ServerConfig,
    /// Served under `/uploads` when set
    pub uploads: Option<Arc<LocalDiskStorage>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<P, A, R, S>(
    app_state: web::Data<AppState<P, A, R, S>>,
    options: AppOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: ProfessorRepository + 'static,
    A: AlunoRepository + 'static,
    R: RevocationRepository + 'static,
    S: PhotoStorage + 'static,
{
    let verifier = web::Data::new(app_state.verifier());
    let cors = create_cors(options.environment, &options.server);
    let uploads = options.uploads.clone();

    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PayloadConfig::new(options.server.max_payload_size))
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api").configure(routes::configure::<P, A, R, S>))
        .configure(move |cfg| {
            if let Some(storage) = uploads {
                routes::uploads::configure(cfg, storage);
            }
        })
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hyperprof-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    handle_domain_error(DomainError::not_found(req.path()))
}
