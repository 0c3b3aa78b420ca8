use serde::{Deserialize, Serialize};
use validator::Validate;

use kg_core::domain::value_objects::auth_response::AuthResponse;

use crate::dto::user::UserResponse;

/// Login request carrying a username/password credential pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "password must not be blank"))]
    pub password: String,
}

/// Token response returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl From<AuthResponse> for AuthResponseDto {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in,
            user: UserResponse::from(&response.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_fail_validation() {
        let request = LoginRequest {
            username: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "ann".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_filled_credentials_pass_validation() {
        let request = LoginRequest {
            username: "ann".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
