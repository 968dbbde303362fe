//! Unit tests for professor profile operations

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::aluno::NewAluno;
use crate::domain::entities::professor::ProfessorInput;
use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::repositories::{
    AlunoRepository, MockAlunoRepository, MockProfessorRepository, ProfessorRepository,
};
use crate::services::password::PasswordHasher;
use crate::services::photo::{MockPhotoStorage, PhotoUpload};
use crate::services::professor::ProfessorService;

type Service = ProfessorService<MockProfessorRepository, MockAlunoRepository, MockPhotoStorage>;

struct Fixture {
    service: Service,
    professors: Arc<MockProfessorRepository>,
    alunos: Arc<MockAlunoRepository>,
    storage: Arc<MockPhotoStorage>,
}

fn fixture() -> Fixture {
    let professors = Arc::new(MockProfessorRepository::new());
    let alunos = Arc::new(MockAlunoRepository::new(professors.clone()));
    let storage = Arc::new(MockPhotoStorage::new());
    let service = ProfessorService::new(
        professors.clone(),
        alunos.clone(),
        storage.clone(),
        PasswordHasher::new(4),
    );
    Fixture {
        service,
        professors,
        alunos,
        storage,
    }
}

fn input(email: &str) -> ProfessorInput {
    ProfessorInput {
        nome: "Helena Prado".to_string(),
        email: email.to_string(),
        idade: 29,
        descricao: "Aulas de química orgânica".to_string(),
        valor_hora: 120.0,
        password: "segredo123".to_string(),
        password_confirmation: "segredo123".to_string(),
    }
}

#[tokio::test]
async fn test_create_hashes_password() {
    let f = fixture();

    let professor = f.service.create(input("helena@example.com")).await.unwrap();

    assert_eq!(professor.email, "helena@example.com");
    assert_ne!(professor.password_hash, "segredo123");
    assert!(PasswordHasher::new(4)
        .verify("segredo123", &professor.password_hash)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_create_rejects_duplicate_email() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();

    let err = f.service.create(input("helena@example.com")).await.unwrap_err();

    match err {
        DomainError::Validation(v) => {
            assert_eq!(v.fields["email"], vec!["is already in use".to_string()]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_reports_every_failed_field() {
    let f = fixture();
    let bad = ProfessorInput {
        idade: 12,
        password_confirmation: "different".to_string(),
        ..input("helena@example.com")
    };

    let err = f.service.create(bad).await.unwrap_err();

    match err {
        DomainError::Validation(v) => {
            assert!(v.fields.contains_key("idade"));
            assert!(v.fields.contains_key("password_confirmation"));
            assert!(!v.fields.contains_key("nome"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_may_keep_own_email() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();

    let updated = f
        .service
        .update(
            "helena@example.com",
            ProfessorInput {
                valor_hora: 150.0,
                ..input("helena@example.com")
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.valor_hora, 150.0);
}

#[tokio::test]
async fn test_update_cannot_take_another_email() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();
    f.service.create(input("igor@example.com")).await.unwrap();

    let err = f
        .service
        .update("helena@example.com", input("igor@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_unknown_subject_is_stale_token() {
    let f = fixture();

    let err = f.service.me("ghost@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::StaleSubject)));

    let err = f.service.delete("ghost@example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let f = fixture();
    assert_eq!(f.service.get(42).await.unwrap_err().kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_list_filters_by_description() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();
    f.service
        .create(ProfessorInput {
            descricao: "Aulas de piano clássico".to_string(),
            ..input("igor@example.com")
        })
        .await
        .unwrap();

    assert_eq!(f.service.list(None).await.unwrap().len(), 2);
    assert_eq!(f.service.list(Some("  ")).await.unwrap().len(), 2);

    let pianists = f.service.list(Some("PIANO")).await.unwrap();
    assert_eq!(pianists.len(), 1);
    assert_eq!(pianists[0].email, "igor@example.com");
}

#[tokio::test]
async fn test_delete_removes_bookings() {
    let f = fixture();
    let professor = f.service.create(input("helena@example.com")).await.unwrap();
    f.alunos
        .create(NewAluno {
            professor_id: professor.id,
            nome: "Joana".to_string(),
            email: "joana@example.com".to_string(),
            data_aula: Utc::now() + Duration::days(3),
        })
        .await
        .unwrap();

    assert_eq!(f.service.alunos("helena@example.com").await.unwrap().len(), 1);

    f.service.delete("helena@example.com").await.unwrap();

    assert!(!f.professors.exists_by_email("helena@example.com").await.unwrap());
    assert!(f
        .alunos
        .find_by_professor_email("helena@example.com")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_update_photo_stores_and_links() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();

    let url = f
        .service
        .update_photo(
            "helena@example.com",
            PhotoUpload {
                filename: "abc-me.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            },
        )
        .await
        .unwrap();

    assert!(url.ends_with("/uploads/abc-me.png"));
    assert_eq!(f.storage.stored().await.len(), 1);
    let me = f.service.me("helena@example.com").await.unwrap();
    assert_eq!(me.foto_perfil.as_deref(), Some(url.as_str()));
}

#[tokio::test]
async fn test_update_photo_rejects_non_images() {
    let f = fixture();
    f.service.create(input("helena@example.com")).await.unwrap();

    let err = f
        .service
        .update_photo(
            "helena@example.com",
            PhotoUpload {
                filename: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![1],
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(f.storage.stored().await.is_empty());
}
