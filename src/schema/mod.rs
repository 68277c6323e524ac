//! Schema-driven row materialization.
//!
//! This module maps tokenized rows to typed records. Callers declare an
//! ordered list of [`Column`]s — header aliases, an output property, and an
//! optional transform/validate pipeline — plus zero or more whole-row
//! validators. Each data row independently becomes either a complete
//! [`Record`] or a set of [`ParseError`]s; a failure in one cell never stops
//! the rest of the row or the rest of the input from being processed.
//!
//! # Resolution rules
//!
//! An exact (case-sensitive) header match always wins, trying each alias in
//! declared order. Only when no alias matches exactly does case-insensitive
//! matching apply, and only if it is enabled for the column (a per-column
//! override, falling back to the parser default). The column name reported
//! in errors is the matched header's original-case text.
//!
//! # Example
//!
//! ```rust
//! use longan::{Column, Parser, ParserConfig, Value, transforms};
//!
//! let parser = Parser::new(ParserConfig::csv())
//!     .with_column(Column::new("Name", "name"))
//!     .with_column(
//!         Column::new("Age", "age")
//!             .with_transform(transforms::integer)
//!             .with_validate(|v| match v.as_int() {
//!                 Some(age) if age >= 0 => None,
//!                 _ => Some("age must not be negative".to_string()),
//!             }),
//!     );
//!
//! let output = parser.parse("Name,Age\nJohn,30\nJane,-5")?;
//! assert_eq!(output.success.len(), 1);
//! assert_eq!(output.errors.len(), 1);
//! # Ok::<(), longan::Error>(())
//! ```

pub mod column;
pub mod error;
pub mod parser;
pub mod record;
pub mod transforms;
pub mod value;

pub use column::{Column, TransformFn, ValidateFn};
pub use error::{ErrorKind, ParseError, ROW_PROPERTY};
pub use parser::{ParseOutput, Parser, ParserConfig, RowValidatorFn};
pub use record::Record;
pub use value::Value;

#[cfg(test)]
mod tests;
