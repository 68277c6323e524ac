//! Character-level tokenization of delimited text (CSV, TSV, etc.)
//!
//! This module turns raw text into a header row plus data rows of string
//! fields. It makes no attempt to type or interpret fields; that is the job
//! of the [`schema`](crate::schema) module.
//!
//! # Features
//!
//! - **Configurable delimiters**: comma, tab, or any custom string of one or
//!   more characters, matched as a whole
//! - **Quote handling**: quoted fields may embed delimiters, escaped quotes,
//!   and literal newlines spanning physical lines
//! - **Skip rules**: discard a fixed number of leading physical lines, and
//!   optionally all blank or whitespace-only lines
//! - **Total**: tokenization never fails; malformed input (for example an
//!   unclosed quote) finalizes with whatever accumulated
//!
//! # Example
//!
//! ```rust
//! use longan::text::{TokenizerConfig, tokenize};
//!
//! let config = TokenizerConfig::new().with_delimiter("::");
//! let text = tokenize("Name::Value\nJohn::123", &config);
//!
//! assert_eq!(text.header, vec!["Name", "Value"]);
//! assert_eq!(text.rows, vec![vec!["John".to_string(), "123".to_string()]]);
//! ```

pub mod config;
pub mod tokenizer;

pub use config::TokenizerConfig;
pub use tokenizer::{TokenizedText, tokenize};
