//! Bearer authentication gate for inbound requests.
//!
//! The gate looks for an `Authorization: Bearer` credential, validates it
//! as an access token, and attaches the resolved principal to the request
//! extensions. A missing or invalid credential never rejects the request
//! at this stage; protected handlers reject through the [`AuthContext`]
//! extractor, which is where "authentication required" surfaces as 401.

use std::future::{ready, Ready};
use std::marker::PhantomData;
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use kg_core::domain::entities::user::User;
use kg_core::repositories::UserRepository;
use kg_shared::types::response::{error_codes, ErrorResponse};

use crate::routes::auth::AppState;

/// Bearer credential prefix in the Authorization header
const TOKEN_PREFIX: &str = "Bearer ";

/// Authenticated principal attached to a request by the gate
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The resolved user
    pub user: User,
}

/// Bearer authentication gate middleware factory
///
/// Generic over the user repository so the gate can resolve principals
/// through the same `AppState` the handlers use.
pub struct AuthenticationGate<U> {
    _repository: PhantomData<U>,
}

impl<U> AuthenticationGate<U> {
    /// Creates a new authentication gate
    pub fn new() -> Self {
        Self {
            _repository: PhantomData,
        }
    }
}

impl<U> Default for AuthenticationGate<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B, U> Transform<S, ServiceRequest> for AuthenticationGate<U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationGateMiddleware<S, U>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationGateMiddleware {
            service: Rc::new(service),
            _repository: PhantomData,
        }))
    }
}

/// Bearer authentication gate middleware service
pub struct AuthenticationGateMiddleware<S, U> {
    service: Rc<S>,
    _repository: PhantomData<U>,
}

impl<S, B, U> Service<ServiceRequest> for AuthenticationGateMiddleware<S, U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // No credential is not an error; the request simply stays
            // anonymous.
            if let Some(token) = bearer_token(req.headers()) {
                let resolved = match req.app_data::<web::Data<AppState<U>>>() {
                    Some(state) => state
                        .auth_service
                        .authenticate(&token)
                        .await
                        .map_err(|e| e.to_string()),
                    None => Err("authentication state not configured".to_string()),
                };

                match resolved {
                    Ok(user) => {
                        req.extensions_mut().insert(AuthContext { user });
                    }
                    Err(reason) => {
                        log::info!("request proceeds unauthenticated: {}", reason);
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Extracts the bearer credential from an Authorization header map
///
/// A missing header or a wrong prefix means "no credential supplied",
/// not an error.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(TOKEN_PREFIX)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
///
/// Resolves to 401 with the error envelope when the gate attached no
/// principal to the request.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                    error_codes::AUTHENTICATION_REQUIRED,
                    "Authentication required",
                ));
                InternalError::from_response("Authentication required", response).into()
            });

        ready(result)
    }
}

/// Extractor for optional authentication
///
/// Never fails; lets a handler observe whether the request carried a
/// valid credential.
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
