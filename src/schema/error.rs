//! Structured parse errors collected during materialization.
//!
//! These are data, not exceptions: the parse accumulates them per cell and
//! per row and keeps going. See [`crate::common::Error`] for the one
//! process-fatal path (malformed configuration).

use serde::{Deserialize, Serialize};

/// Property name reported by row-validation errors, which have no single
/// originating column.
pub const ROW_PROPERTY: &str = "<row>";

/// Discriminates the recorded failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// No header matched any of the column's aliases
    Missing,
    /// A required field was empty, or a validate callback rejected the value
    Validation,
    /// A transform callback failed to convert the raw string
    Transform,
    /// A whole-row validator rejected a fully materialized record
    RowValidation,
}

/// One recorded failure, with full row and column context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// Failure mode
    pub kind: ErrorKind,
    /// 0-based index of the data row within the tokenized rows
    pub row: usize,
    /// Matched header name in its original case; the alias list joined by
    /// `" or "` when no header matched; `None` for row-validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Output property of the failing column, or [`ROW_PROPERTY`]
    pub property: String,
    /// Raw field value before transformation, or a JSON snapshot of the
    /// record for row-validation errors
    pub value: String,
    /// Human-readable failure message
    pub message: String,
}
