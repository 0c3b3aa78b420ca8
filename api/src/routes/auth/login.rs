use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponseDto, LoginRequest};
use crate::handlers::error::handle_domain_error;

use kg_core::errors::DomainError;
use kg_core::repositories::UserRepository;

use super::AppState;

/// Handler for POST /auth/login
///
/// Authenticates a username/password pair and returns an access/refresh
/// token pair together with the user profile.
///
/// # Responses
/// - 201 Created: tokens issued
/// - 400 Bad Request: blank username or password
/// - 401 Unauthorized: unknown user or wrong password
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if request.validate().is_err() {
        return handle_domain_error(DomainError::Validation {
            message: "username and password must not be blank".to_string(),
        });
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Created().json(AuthResponseDto::from(auth)),
        Err(error) => handle_domain_error(error),
    }
}
