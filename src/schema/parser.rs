//! Schema parser: binds declared columns to headers and materializes rows.

use std::collections::HashMap;

use super::column::Column;
use super::error::{ErrorKind, ParseError, ROW_PROPERTY};
use super::record::Record;
use super::value::Value;
use crate::common::{Error, Result};
use crate::text::{TokenizerConfig, tokenize};

/// Checks a fully materialized record, returning a failure message when the
/// row is rejected.
pub type RowValidatorFn = Box<dyn Fn(&Record) -> Option<String>>;

/// Configuration for a schema [`Parser`].
///
/// Carries the character-level tokenizer settings plus the parser-wide
/// defaults for trimming and case-insensitive header matching; individual
/// [`Column`]s may override the latter two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Field delimiter; one or more characters, matched as a whole string
    pub delimiter: String,
    /// Quote character for quoted field sections
    pub quote: char,
    /// Escape character that protects a quote inside a quoted section
    pub escape: char,
    /// Number of physical lines discarded from the start of the input
    pub skip_rows: usize,
    /// Whether blank and whitespace-only lines are discarded
    pub skip_empty_lines: bool,
    /// Whether field values are trimmed before emptiness checks and
    /// transforms; columns may override
    pub trim: bool,
    /// Whether column aliases fall back to case-insensitive header matching
    /// when no exact match exists; columns may override
    pub case_insensitive_columns: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),      // CSV default
            quote: '"',                      // Standard CSV quoting
            escape: '"',                     // Doubled quotes escape
            skip_rows: 0,                    // Keep every line
            skip_empty_lines: true,          // Drop blank lines
            trim: true,                      // Trim fields by default
            case_insensitive_columns: false, // Exact header matching only
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create CSV (comma-separated) configuration
    pub fn csv() -> Self {
        Self::default()
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter("\t")
    }

    /// Create pipe-separated configuration
    pub fn psv() -> Self {
        Self::new().with_delimiter("|")
    }

    /// Set the field delimiter (one or more characters)
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the escape character
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Set the number of leading physical lines to discard
    pub fn with_skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    /// Enable/disable discarding blank and whitespace-only lines
    pub fn with_skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }

    /// Enable/disable trimming of field values before processing
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enable/disable the case-insensitive header matching fallback
    pub fn with_case_insensitive_columns(mut self, enabled: bool) -> Self {
        self.case_insensitive_columns = enabled;
        self
    }

    /// Character-level configuration handed to the tokenizer
    pub fn tokenizer(&self) -> TokenizerConfig {
        TokenizerConfig {
            delimiter: self.delimiter.clone(),
            quote: self.quote,
            escape: self.escape,
            skip_rows: self.skip_rows,
            skip_empty_lines: self.skip_empty_lines,
        }
    }
}

/// Result of a parse: cleanly materialized records plus every recorded
/// error, in row-then-column-then-validator order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ParseOutput {
    /// Rows that materialized with zero errors; partial records are never
    /// emitted
    pub success: Vec<Record>,
    /// All recorded errors across all rows
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Whether any row produced an error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Where a column landed after header resolution.
enum Binding {
    /// Matched header: field index and original-case header name
    Matched { index: usize, header: String },
    /// No alias matched any header
    Unmatched,
}

/// Schema-driven parser for delimited text.
///
/// A parser is built once - configuration, columns, row validators - and is
/// immutable afterwards; the builder methods consume `self` and return a new
/// parser value. [`parse`](Parser::parse) may then be called any number of
/// times.
pub struct Parser {
    config: ParserConfig,
    columns: Vec<Column>,
    row_validators: Vec<RowValidatorFn>,
}

impl Parser {
    /// Create a parser with the given configuration and no columns
    pub fn new(config: ParserConfig) -> Self {
        Parser {
            config,
            columns: Vec::new(),
            row_validators: Vec::new(),
        }
    }

    /// Attach a column; columns are processed in attachment order
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Attach a whole-row validator, run in attachment order against rows
    /// that materialized without column-level errors
    pub fn with_row_validator(
        mut self,
        validator: impl Fn(&Record) -> Option<String> + 'static,
    ) -> Self {
        self.row_validators.push(Box::new(validator));
        self
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Declared columns, in processing order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Parse `input` into typed records and structured errors.
    ///
    /// Every data row is attempted independently; failures are collected
    /// into [`ParseOutput::errors`] and never abort the parse. The only
    /// error returned here is [`Error::InvalidConfig`] for a configuration
    /// that cannot be used at all (an empty delimiter).
    pub fn parse(&self, input: &str) -> Result<ParseOutput> {
        if self.config.delimiter.is_empty() {
            return Err(Error::InvalidConfig(
                "delimiter must not be empty".to_string(),
            ));
        }

        let text = tokenize(input, &self.config.tokenizer());
        let bindings = self.bind_columns(&text.header);

        let mut output = ParseOutput::default();
        for (row_index, row) in text.rows.iter().enumerate() {
            let (record, mut errors) = self.materialize_row(row_index, row, &bindings);
            if errors.is_empty() {
                // Row validators only see complete records; all of them run,
                // errors accumulating
                for validator in &self.row_validators {
                    if let Some(message) = validator(&record) {
                        errors.push(ParseError {
                            kind: ErrorKind::RowValidation,
                            row: row_index,
                            column: None,
                            property: ROW_PROPERTY.to_string(),
                            value: serde_json::to_string(&record).unwrap_or_default(),
                            message,
                        });
                    }
                }
            }
            if errors.is_empty() {
                output.success.push(record);
            } else {
                output.errors.append(&mut errors);
            }
        }

        Ok(output)
    }

    /// Resolve each column against the header, once per parse.
    ///
    /// An exact match on any alias (declared order) always wins; only then
    /// does the case-insensitive fallback scan aliases in declared order
    /// against headers in header order. Duplicate headers resolve to their
    /// first occurrence.
    fn bind_columns(&self, header: &[String]) -> Vec<Binding> {
        let mut first_index: HashMap<&str, usize> = HashMap::new();
        for (index, name) in header.iter().enumerate() {
            first_index.entry(name.as_str()).or_insert(index);
        }

        self.columns
            .iter()
            .map(|column| {
                for alias in &column.aliases {
                    if let Some(&index) = first_index.get(alias.as_str()) {
                        return Binding::Matched {
                            index,
                            header: alias.clone(),
                        };
                    }
                }
                if column
                    .case_insensitive
                    .unwrap_or(self.config.case_insensitive_columns)
                {
                    for alias in &column.aliases {
                        let folded = alias.to_lowercase();
                        for (index, name) in header.iter().enumerate() {
                            if name.to_lowercase() == folded {
                                return Binding::Matched {
                                    index,
                                    header: name.clone(),
                                };
                            }
                        }
                    }
                }
                Binding::Unmatched
            })
            .collect()
    }

    /// Materialize one data row, evaluating every column even after earlier
    /// ones failed so that all errors for the row are collected.
    fn materialize_row(
        &self,
        row_index: usize,
        row: &[String],
        bindings: &[Binding],
    ) -> (Record, Vec<ParseError>) {
        let mut record = Record::new();
        let mut errors = Vec::new();

        for (column, binding) in self.columns.iter().zip(bindings) {
            let Binding::Matched { index, header } = binding else {
                if column.nullable {
                    record.insert(column.property.clone(), Value::Null);
                } else if let Some(default) = &column.default {
                    record.insert(column.property.clone(), default.clone());
                } else {
                    errors.push(ParseError {
                        kind: ErrorKind::Missing,
                        row: row_index,
                        column: Some(column.aliases.join(" or ")),
                        property: column.property.clone(),
                        value: String::new(),
                        message: "Column is missing".to_string(),
                    });
                }
                continue;
            };

            // A short row reads as an empty field
            let raw = row.get(*index).map(String::as_str).unwrap_or("");
            let value = if column.trim.unwrap_or(self.config.trim) {
                raw.trim()
            } else {
                raw
            };

            if value.is_empty() {
                if column.nullable {
                    record.insert(column.property.clone(), Value::Null);
                } else if let Some(default) = &column.default {
                    record.insert(column.property.clone(), default.clone());
                } else {
                    errors.push(ParseError {
                        kind: ErrorKind::Validation,
                        row: row_index,
                        column: Some(header.clone()),
                        property: column.property.clone(),
                        value: String::new(),
                        message: "Required field is empty".to_string(),
                    });
                }
                continue;
            }

            let typed = match &column.transform {
                Some(transform) => match transform(value) {
                    Ok(typed) => typed,
                    Err(message) => {
                        errors.push(ParseError {
                            kind: ErrorKind::Transform,
                            row: row_index,
                            column: Some(header.clone()),
                            property: column.property.clone(),
                            value: value.to_string(),
                            message,
                        });
                        continue;
                    }
                },
                None => Value::String(value.to_string()),
            };

            if let Some(validate) = &column.validate {
                if let Some(message) = validate(&typed) {
                    errors.push(ParseError {
                        kind: ErrorKind::Validation,
                        row: row_index,
                        column: Some(header.clone()),
                        property: column.property.clone(),
                        value: value.to_string(),
                        message,
                    });
                    continue;
                }
            }

            record.insert(column.property.clone(), typed);
        }

        (record, errors)
    }
}
