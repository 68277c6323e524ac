//! Unified error types for the Longan library.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The parser configuration cannot be used as given
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
