//! # KeyGate Core
//!
//! Core business logic and domain layer for the KeyGate backend.
//! This crate contains the domain entities, the token and authentication
//! services, the repository interfaces, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
