pub mod auth;
pub mod cors;

pub use auth::{AuthContext, AuthenticationGate, OptionalAuth};
pub use cors::create_cors;
