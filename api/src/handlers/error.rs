//! Conversion of domain errors into HTTP responses.
//!
//! Every `ErrorKind` maps to exactly one status code and error code; the
//! match below is exhaustive so a new kind cannot slip through unmapped.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use hp_core::errors::{DomainError, ErrorKind, ValidationError};
use hp_shared::errors::{error_codes, ErrorResponse};

/// Status code and client-facing error code for each kind of failure
pub fn classify(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidToken => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        ErrorKind::Expired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
        ErrorKind::Revoked => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_REVOKED),
        ErrorKind::BadCredentials => (StatusCode::UNAUTHORIZED, error_codes::BAD_CREDENTIALS),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        ErrorKind::Application => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
    }
}

/// Build the JSON error body for a domain error
pub fn error_response(error: &DomainError) -> ErrorResponse {
    let (status, code) = classify(error.kind());

    match error {
        DomainError::Validation(validation) => {
            let response = ErrorResponse::new(code, &validation.message, status.as_u16());
            if validation.fields.is_empty() {
                response
            } else {
                response.with_field_errors(validation.fields.clone())
            }
        }
        // Storage and internal details stay in the logs
        DomainError::Storage { .. } | DomainError::Internal { .. } => {
            ErrorResponse::new(code, "An internal error occurred", status.as_u16())
        }
        other => ErrorResponse::new(code, other.to_string(), status.as_u16()),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    ApiError(error).error_response()
}

/// Domain error carried through actix's error plumbing
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(self.0.kind()).0
    }

    fn error_response(&self) -> HttpResponse {
        match self.0.kind() {
            ErrorKind::Application => tracing::error!(error = %self.0, "Request failed"),
            kind => tracing::debug!(?kind, error = %self.0, "Request rejected"),
        }

        HttpResponse::build(self.status_code()).json(error_response(&self.0))
    }
}

fn bad_input(message: String) -> actix_web::Error {
    ApiError(DomainError::Validation(ValidationError::message(message))).into()
}

/// Malformed or mistyped JSON bodies are validation failures
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_input(format!("Invalid request body: {}", err))
}

/// Path parameters that do not parse, such as a non-numeric id
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    bad_input(format!("Invalid path parameter: {}", err))
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_input(format!("Invalid query parameter: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_core::errors::TokenError;

    #[test]
    fn test_every_kind_has_a_status() {
        let cases = [
            (ErrorKind::InvalidToken, 401),
            (ErrorKind::Expired, 401),
            (ErrorKind::Revoked, 401),
            (ErrorKind::BadCredentials, 401),
            (ErrorKind::NotFound, 404),
            (ErrorKind::Validation, 400),
            (ErrorKind::Application, 500),
        ];
        for (kind, status) in cases {
            assert_eq!(classify(kind).0.as_u16(), status, "{:?}", kind);
        }
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let mut validation = ValidationError::new();
        validation.add("nome", "must be between 3 and 100 characters");
        validation.add("email", "is already in use");

        let body = error_response(&DomainError::Validation(validation));
        assert_eq!(body.status, 400);
        assert_eq!(body.error, error_codes::VALIDATION_ERROR);

        let fields = body.errors.unwrap();
        assert_eq!(fields["email"], vec!["is already in use".to_string()]);
        assert!(fields.contains_key("nome"));
    }

    #[test]
    fn test_storage_details_are_hidden() {
        let body = error_response(&DomainError::storage("connection refused on 10.0.0.3"));
        assert_eq!(body.status, 500);
        assert!(!body.message.contains("10.0.0.3"));
    }

    #[test]
    fn test_token_errors_use_specific_codes() {
        let body = error_response(&DomainError::Token(TokenError::Expired));
        assert_eq!(body.error, error_codes::TOKEN_EXPIRED);
        assert_eq!(body.status, 401);
    }
}
