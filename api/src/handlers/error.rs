//! Mapping of domain errors onto HTTP responses.

use actix_web::{http::StatusCode, HttpResponse};

use kg_core::errors::{AuthError, DomainError};
use kg_shared::types::response::ErrorResponse;

/// Maps a domain error to an HTTP response carrying the error envelope
///
/// Credential and token failures surface as 401; duplicate users and
/// validation failures as 400; lookups as 404; everything else as 500.
/// Internal causes are logged here and never leak into the body.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = match &error {
        DomainError::Auth(AuthError::AuthenticationFailed) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
        DomainError::Auth(AuthError::UserAlreadyExists { .. }) => StatusCode::BAD_REQUEST,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        log::error!("internal error: {}", error);
        let body = ErrorResponse::new(error.code(), "An internal error occurred");
        return HttpResponse::build(status).json(body);
    }

    log::debug!("request rejected: {}", error);
    HttpResponse::build(status).json(ErrorResponse::from(error))
}
