//! Authentication route handlers
//!
//! - `POST /auth/login` - credential login
//! - `POST /auth/token` - token refresh

pub mod login;
pub mod refresh;

use std::sync::Arc;

use kg_core::repositories::UserRepository;
use kg_core::services::auth::AuthService;

/// Application state that holds the shared services
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}
