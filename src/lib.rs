//! Longan - schema-driven parsing for delimited text formats
//!
//! This library turns CSV-like text into typed records by pairing a
//! character-level tokenizer with a declarative column schema. Callers
//! declare the columns they expect — each with one or more header aliases,
//! an output property, and an optional transform/validate pipeline — and
//! receive the rows that materialized cleanly alongside a flat list of
//! structured errors for everything that did not.
//!
//! # Features
//!
//! - **Configurable tokenization**: custom (multi-character) delimiters,
//!   quote and escape characters, skipped leading rows, blank-line handling
//! - **Quoted fields**: embedded delimiters, escaped quotes, and literal
//!   newlines spanning physical lines
//! - **Declarative schema**: header aliases with exact-match priority,
//!   optional case-insensitive resolution, per-column trim overrides
//! - **Typed records**: transforms convert raw strings into typed values,
//!   validators reject values with a message
//! - **Error accumulation**: every failure carries row, column, and property
//!   context; one bad cell never aborts the parse
//!
//! # Example - Parsing with a schema
//!
//! ```rust
//! use longan::{Column, Parser, ParserConfig, Value, transforms};
//!
//! let parser = Parser::new(ParserConfig::csv())
//!     .with_column(Column::new("Name", "name"))
//!     .with_column(Column::new("Age", "age").with_transform(transforms::integer));
//!
//! let output = parser.parse("Name,Age\nJohn,30\nJane,not a number")?;
//!
//! assert_eq!(output.success.len(), 1);
//! assert_eq!(output.success[0].get("name"), Some(&Value::String("John".into())));
//! assert_eq!(output.success[0].get("age"), Some(&Value::Int(30)));
//!
//! // The bad row is reported, not thrown
//! assert!(output.has_errors());
//! assert_eq!(output.errors[0].row, 1);
//! # Ok::<(), longan::Error>(())
//! ```
//!
//! # Example - Tokenizing without a schema
//!
//! ```rust
//! use longan::{TokenizerConfig, tokenize};
//!
//! let text = tokenize("a,b\n\"c,d\",e", &TokenizerConfig::default());
//! assert_eq!(text.header, vec!["a", "b"]);
//! assert_eq!(text.rows, vec![vec!["c,d".to_string(), "e".to_string()]]);
//! ```

/// Shared plumbing: unified error types.
pub mod common;

/// Declarative column schema and row materialization.
///
/// Maps each tokenized data row to a typed [`Record`](schema::Record) or a
/// set of [`ParseError`](schema::ParseError)s, given the declared columns
/// and row validators.
pub mod schema;

/// Character-level tokenization of delimited text.
///
/// Turns raw text into a header row plus data rows of string fields,
/// honoring quoting, escaping, and line continuation inside quoted fields.
pub mod text;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use schema::{
    Column, ErrorKind, ParseError, ParseOutput, Parser, ParserConfig, Record, Value, transforms,
};
pub use text::{TokenizedText, TokenizerConfig, tokenize};
