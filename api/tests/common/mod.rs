//! Shared fixtures for the HTTP tests: the real services wired to the
//! in-memory repositories from `hp_core`'s `mocks` feature.

#![allow(dead_code)]

use actix_web::{http::header, test, web};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

use hp_api::app::AppState;
use hp_core::domain::entities::{NewProfessor, Professor};
use hp_core::repositories::{
    MockAlunoRepository, MockProfessorRepository, MockRevocationRepository, ProfessorRepository,
};
use hp_core::services::photo::MockPhotoStorage;
use hp_core::services::token::{Clock, KindSettings, ManualClock, SigningContext, TokenCodec};
use hp_core::services::{AlunoService, PasswordHasher, ProfessorService, SessionService};

pub const ACCESS_SECRET: &str = "test-access-secret-0123456789";
pub const REFRESH_SECRET: &str = "test-refresh-secret-9876543210";
pub const PASSWORD: &str = "segredo123";

pub type TestState = AppState<
    MockProfessorRepository,
    MockAlunoRepository,
    MockRevocationRepository,
    MockPhotoStorage,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub professors: Arc<MockProfessorRepository>,
    pub revocations: Arc<MockRevocationRepository>,
    pub storage: Arc<MockPhotoStorage>,
    pub clock: Arc<ManualClock>,
    pub hasher: PasswordHasher,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
}

pub fn context() -> TestContext {
    let clock = Arc::new(ManualClock::new(start_time()));
    let dyn_clock: Arc<dyn Clock> = clock.clone();

    let signing = SigningContext::new(
        KindSettings::new(ACCESS_SECRET, Duration::hours(1)),
        KindSettings::new(REFRESH_SECRET, Duration::days(1)),
    )
    .unwrap();
    let codec = Arc::new(TokenCodec::new(signing, dyn_clock.clone()));
    let hasher = PasswordHasher::new(4);

    let professors = Arc::new(MockProfessorRepository::new());
    let alunos = Arc::new(MockAlunoRepository::new(professors.clone()));
    let revocations = Arc::new(MockRevocationRepository::new());
    let storage = Arc::new(MockPhotoStorage::new());

    let sessions = Arc::new(SessionService::new(
        professors.clone(),
        revocations.clone(),
        codec,
        hasher,
    ));
    let professor_service = Arc::new(ProfessorService::new(
        professors.clone(),
        alunos.clone(),
        storage.clone(),
        hasher,
    ));
    let aluno_service = Arc::new(AlunoService::new(professors.clone(), alunos, dyn_clock));

    TestContext {
        state: web::Data::new(AppState::new(sessions, professor_service, aluno_service)),
        professors,
        revocations,
        storage,
        clock,
        hasher,
    }
}

impl TestContext {
    /// Insert a professor whose password is [`PASSWORD`]
    pub async fn seed_professor(&self, email: &str, descricao: &str) -> Professor {
        self.professors
            .create(NewProfessor {
                nome: "Maria Silva".to_string(),
                email: email.to_string(),
                idade: 34,
                descricao: descricao.to_string(),
                valor_hora: 80.0,
                password_hash: self.hasher.hash(PASSWORD).await.unwrap(),
            })
            .await
            .unwrap()
    }
}

pub fn professor_body(email: &str) -> serde_json::Value {
    json!({
        "nome": "Maria Silva",
        "email": email,
        "idade": 34,
        "descricao": "Aulas de matemática para o ensino médio",
        "valor_hora": 80.0,
        "password": PASSWORD,
        "password_confirmation": PASSWORD,
    })
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub const FORM_BOUNDARY: &str = "hyperprof-test-boundary";

/// `POST /api/professores/foto` carrying one file part
pub fn photo_request(
    token: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> test::TestRequest {
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n",
        boundary = FORM_BOUNDARY,
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", FORM_BOUNDARY).as_bytes());

    test::TestRequest::post()
        .uri("/api/professores/foto")
        .insert_header(bearer(token))
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", FORM_BOUNDARY),
        ))
        .set_payload(body)
}
