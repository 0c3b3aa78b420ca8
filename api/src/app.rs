//! Application factory
//!
//! Builds the actix-web application with its middleware stack and all
//! routes wired to the shared application state.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::AuthenticationGate;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, refresh::refresh, AppState};
use crate::routes::users::{me::me, register::register};

use kg_core::repositories::UserRepository;

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Middleware: the last wrap runs first, so requests pass the
        // logger, then CORS, then the authentication gate.
        .wrap(AuthenticationGate::<U>::new())
        .wrap(cors)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Authentication routes
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(login::<U>))
                .route("/token", web::post().to(refresh::<U>)),
        )
        // User routes
        .service(
            web::scope("/user")
                .route("", web::post().to(register::<U>))
                .route("/me", web::get().to(me)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "keygate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
