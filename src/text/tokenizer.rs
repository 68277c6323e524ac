//! Character-level tokenizer for delimited text.
//!
//! The scanner is a two-state machine (unquoted/quoted) driven one character
//! at a time. The quoted state carries across physical lines, so a quoted
//! field may embed literal newlines; the row is only complete once a line
//! ends outside a quoted section.

use super::config::TokenizerConfig;

/// Tokenized form of a delimited text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// First retained row, exactly as written (untrimmed, duplicates kept)
    pub header: Vec<String>,
    /// Data rows in input order; row length may differ from the header length
    pub rows: Vec<Vec<String>>,
}

impl TokenizedText {
    /// Whether the input produced neither a header nor any data rows
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Tokenize `input` into a header row and data rows.
///
/// Physical lines are spans between `\n`, with an adjacent `\r` stripped, so
/// CRLF and LF inputs are handled alike. The first retained line becomes the
/// header; every later retained line becomes a data row. Tokenization is
/// total: an unclosed quote at end of input finalizes the field with
/// whatever accumulated rather than failing.
///
/// When `skip_empty_lines` is off, a blank or whitespace-only physical line
/// tokenizes to a single-element row containing one empty string, so the
/// line still occupies a row slot. An empty delimiter yields an empty
/// result; [`Parser::parse`](crate::schema::Parser::parse) rejects it up
/// front.
pub fn tokenize(input: &str, config: &TokenizerConfig) -> TokenizedText {
    let mut text = TokenizedText::default();
    if input.is_empty() || config.delimiter.is_empty() {
        return text;
    }

    let delimiter: Vec<char> = config.delimiter.chars().collect();
    let lines: Vec<&str> = input.split('\n').collect();

    let mut have_header = false;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();

    for (line_no, raw_line) in lines.iter().enumerate() {
        if line_no < config.skip_rows {
            continue;
        }
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        // Blank physical line outside a quoted section: discard, or keep a
        // single empty field so the line still occupies a row slot
        if !in_quotes && line.trim().is_empty() {
            if !config.skip_empty_lines {
                retain_row(&mut text, &mut have_header, vec![String::new()]);
            }
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if in_quotes {
                if c == config.quote
                    && config.escape == config.quote
                    && chars.get(i + 1) == Some(&config.quote)
                {
                    // Doubled quote is one literal quote
                    field.push(config.quote);
                    i += 2;
                } else if c == config.escape
                    && config.escape != config.quote
                    && chars.get(i + 1) == Some(&config.quote)
                {
                    // Escaped quote is one literal quote
                    field.push(config.quote);
                    i += 2;
                } else if c == config.quote {
                    // Closing quote - not part of the field
                    in_quotes = false;
                    i += 1;
                } else {
                    field.push(c);
                    i += 1;
                }
            } else if chars[i..].starts_with(&delimiter) {
                // Field separator
                row.push(std::mem::take(&mut field));
                field_start = true;
                i += delimiter.len();
            } else if c == config.quote && field_start {
                // Opening quote - not part of the field
                in_quotes = true;
                field_start = false;
                i += 1;
            } else {
                // Literal character, including a quote mid-field
                field.push(c);
                field_start = false;
                i += 1;
            }
        }

        if in_quotes && line_no + 1 < lines.len() {
            // Quoted field continues onto the next physical line
            field.push('\n');
            continue;
        }

        // Either the line ended outside quotes, or an unclosed quote ran to
        // the end of input; both finalize the field and the row
        in_quotes = false;
        row.push(std::mem::take(&mut field));
        field_start = true;
        retain_row(&mut text, &mut have_header, std::mem::take(&mut row));
    }

    text
}

/// The first retained row is the header; every later one is a data row
fn retain_row(text: &mut TokenizedText, have_header: &mut bool, row: Vec<String>) {
    if *have_header {
        text.rows.push(row);
    } else {
        text.header = row;
        *have_header = true;
    }
}
