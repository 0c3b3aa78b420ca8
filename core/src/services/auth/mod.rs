//! Authentication service module
//!
//! Orchestrates the user directory and the token service: account
//! registration, credential login, token refresh, and bearer resolution
//! for the request gate.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
