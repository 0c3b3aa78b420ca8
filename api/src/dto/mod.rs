//! Request and response DTOs for the HTTP surface.

pub mod auth;
pub mod user;

pub use auth::{AuthResponseDto, LoginRequest};
pub use user::{RegisterRequest, UserResponse};
