//! Unified error types for the Longan library.
//!
//! Per-cell and per-row parse failures are not represented here: those are
//! data, collected into [`ParseOutput`](crate::schema::ParseOutput) as
//! structured [`ParseError`](crate::schema::ParseError) values. The types in
//! this module cover the only process-fatal path, a malformed configuration
//! detected when a parse is invoked.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
