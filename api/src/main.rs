use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use kg_api::app::create_app;
use kg_api::routes::auth::AppState;
use kg_core::services::auth::AuthService;
use kg_core::services::token::{TokenService, TokenServiceConfig};
use kg_infra::MemoryUserRepository;
use kg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting KeyGate API server");

    // Load configuration
    let config = AppConfig::from_env();
    if std::env::var("JWT_SECRET").is_err() {
        log::warn!("JWT_SECRET not set; falling back to the development secret");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Wire the services: the in-memory user directory, the token service
    // over the shared secret, and the auth service on top of both.
    let user_repository = Arc::new(MemoryUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(user_repository, token_service));

    let app_state = web::Data::new(AppState { auth_service });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
