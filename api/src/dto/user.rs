use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kg_core::domain::entities::user::User;

/// Registration request for a new user account
///
/// The repeated password is compared in the handler; `validator` covers
/// the length rules.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub full_name: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    /// Repeated password, must match `password`
    #[validate(length(min = 8, max = 128))]
    pub password2: String,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    /// Comma-joined role list, the same form access tokens embed
    pub roles: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            roles: user.joined_roles(),
        }
    }
}
