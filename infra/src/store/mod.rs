//! User directory store implementations.

pub mod memory;
