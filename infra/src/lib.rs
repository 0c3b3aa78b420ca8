//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository interfaces. The only
//! collaborator KeyGate consumes is the user directory; the in-memory
//! store here backs it for development and tests.

pub mod store;

pub use store::memory::MemoryUserRepository;
