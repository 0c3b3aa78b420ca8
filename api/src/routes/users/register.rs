use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::user::{RegisterRequest, UserResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::auth::AppState;

use kg_core::errors::DomainError;
use kg_core::repositories::UserRepository;

/// Handler for POST /user
///
/// Registers a new user account.
///
/// # Responses
/// - 201 Created: the public view of the new user
/// - 400 Bad Request: validation failure, mismatched passwords, or
///   duplicate username
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        log::debug!("registration request failed validation: {}", errors);
        return handle_domain_error(DomainError::Validation {
            message: errors.to_string(),
        });
    }

    if request.password != request.password2 {
        return handle_domain_error(DomainError::Validation {
            message: "passwords do not match".to_string(),
        });
    }

    match state
        .auth_service
        .register(&request.username, &request.full_name, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(&user)),
        Err(error) => handle_domain_error(error),
    }
}
