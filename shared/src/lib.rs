//! Shared utilities and common types for the KeyGate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Wire-level error response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use types::response::{error_codes, ErrorResponse};
