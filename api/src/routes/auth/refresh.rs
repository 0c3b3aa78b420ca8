use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::AuthResponseDto;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::bearer_token;

use kg_core::repositories::UserRepository;
use kg_shared::types::response::{error_codes, ErrorResponse};

use super::AppState;

/// Handler for POST /auth/token
///
/// Exchanges a refresh token, carried as the bearer credential, for a
/// new access/refresh pair. This lets a client recover from an expired
/// access token without repeating the login.
///
/// # Responses
/// - 201 Created: new pair issued
/// - 400 Bad Request: no bearer credential on the request
/// - 401 Unauthorized: the credential is not a valid refresh token
pub async fn refresh<U>(req: HttpRequest, state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::VALIDATION_ERROR,
                "A refresh token must be supplied as a bearer credential",
            ));
        }
    };

    match state.auth_service.refresh(&token).await {
        Ok(auth) => HttpResponse::Created().json(AuthResponseDto::from(auth)),
        Err(error) => handle_domain_error(error),
    }
}
