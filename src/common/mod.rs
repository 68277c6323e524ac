//! Common types and utilities shared across the crate.

// Submodule declarations
pub mod error;

// Re-exports
pub use error::{Error, Result};
