//! Serves stored profile photos; only mounted in development

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use hp_core::errors::DomainError;
use hp_infra::storage::{content_type_for, LocalDiskStorage};

use crate::handlers::error::handle_domain_error;

pub fn configure(cfg: &mut web::ServiceConfig, storage: Arc<LocalDiskStorage>) {
    cfg.app_data(web::Data::from(storage))
        .route("/uploads/{file}", web::get().to(serve));
}

/// GET /uploads/{file}
async fn serve(storage: web::Data<LocalDiskStorage>, file: web::Path<String>) -> HttpResponse {
    match storage.read(&file).await {
        Ok(Some(bytes)) => HttpResponse::Ok()
            .content_type(content_type_for(&file))
            .body(bytes),
        Ok(None) => handle_domain_error(DomainError::not_found("Upload")),
        Err(error) => handle_domain_error(error.into()),
    }
}
