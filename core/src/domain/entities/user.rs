//! User entity representing a registered account in the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to every newly registered user
pub const DEFAULT_ROLE: &str = "USER";

/// User entity representing a registered user
///
/// The token layer treats this as read-only input supplied by the user
/// directory; only the directory mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique within the directory
    pub username: String,

    /// Display name embedded in access tokens
    pub full_name: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Role names granted to this user
    pub roles: Vec<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with the default role
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            full_name: full_name.into(),
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
            created_at: Utc::now(),
        }
    }

    /// Comma-joined role list, the form embedded in access tokens
    pub fn joined_roles(&self) -> String {
        self.roles.join(", ")
    }

    /// Checks whether the user holds a given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
