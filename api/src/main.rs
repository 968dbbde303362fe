use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use hp_api::app::{create_app, AppOptions, AppState};
use hp_api::telemetry;
use hp_core::services::token::{
    Clock, RevocationCleanupService, SigningContext, SystemClock, TokenCodec,
};
use hp_core::services::{AlunoService, PasswordHasher, ProfessorService, SessionService};
use hp_infra::database::{
    DatabasePool, MySqlAlunoRepository, MySqlProfessorRepository, MySqlRevocationRepository,
};
use hp_infra::storage::LocalDiskStorage;
use hp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    telemetry::init(&config.logging);

    info!(environment = %config.environment, "Starting HyperProf API server");

    let db = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    db.ensure_schema().await.context("Failed to apply the database schema")?;

    let professors = Arc::new(MySqlProfessorRepository::new(&db));
    let alunos = Arc::new(MySqlAlunoRepository::new(&db));
    let revocations = Arc::new(MySqlRevocationRepository::new(&db));

    let storage = Arc::new(LocalDiskStorage::new(
        &config.server.upload_dir,
        config.server.public_base_url(),
    ));
    storage
        .ensure_root()
        .await
        .context("Failed to create the upload directory")?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let signing = SigningContext::from_config(&config.auth.jwt)?;
    let codec = Arc::new(TokenCodec::new(signing, clock.clone()));
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);

    let sessions = Arc::new(SessionService::new(
        professors.clone(),
        revocations.clone(),
        codec,
        hasher.clone(),
    ));
    let professor_service = Arc::new(ProfessorService::new(
        professors.clone(),
        alunos.clone(),
        storage.clone(),
        hasher,
    ));
    let aluno_service = Arc::new(AlunoService::new(professors, alunos, clock.clone()));

    let cleanup = Arc::new(RevocationCleanupService::new(
        revocations,
        clock,
        config.auth.cleanup.clone(),
    ));
    let _cleanup_task = cleanup.start_background_task();

    let app_state = web::Data::new(AppState::new(sessions, professor_service, aluno_service));
    let options = AppOptions {
        environment: config.environment,
        server: config.server.clone(),
        uploads: config.environment.is_development().then(|| storage.clone()),
    };

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind to address");

    HttpServer::new(move || {
        create_app(app_state.clone(), options.clone()).wrap(TracingLogger::default())
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}
