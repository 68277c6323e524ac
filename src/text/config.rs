//! Tokenizer configuration.

/// Configuration for tokenizing delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Field delimiter; one or more characters, matched as a whole string
    pub delimiter: String,
    /// Quote character opening and closing quoted field sections
    pub quote: char,
    /// Escape character that protects a quote inside a quoted section;
    /// when equal to `quote`, a doubled quote escapes
    pub escape: char,
    /// Number of physical lines discarded from the very start of the input,
    /// before header detection or any other processing
    pub skip_rows: usize,
    /// Whether blank and whitespace-only lines are discarded
    pub skip_empty_lines: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(), // CSV default
            quote: '"',                 // Standard CSV quoting
            escape: '"',                // Doubled quotes escape
            skip_rows: 0,               // Keep every line
            skip_empty_lines: true,     // Drop blank lines by default
        }
    }
}

impl TokenizerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
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

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter("\t")
    }

    /// Create pipe-separated configuration
    pub fn psv() -> Self {
        Self::new().with_delimiter("|")
    }
}
