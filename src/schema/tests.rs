//! Tests for schema-driven row materialization

use super::*;
use crate::common::Error;

fn non_negative(value: &Value) -> Option<String> {
    match value.as_int() {
        Some(v) if v >= 0 => None,
        _ => Some("neg".to_string()),
    }
}

#[test]
fn test_transform_and_validate_scenario() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_column(
            Column::new("Age", "age")
                .with_transform(transforms::integer)
                .with_validate(non_negative),
        );

    let output = parser.parse("Name,Age\nJohn,30\nJane,-5").unwrap();

    assert_eq!(output.success.len(), 1);
    let record = &output.success[0];
    assert_eq!(record.get("name"), Some(&Value::String("John".to_string())));
    assert_eq!(record.get("age"), Some(&Value::Int(30)));

    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.kind, ErrorKind::Validation);
    assert_eq!(error.row, 1);
    assert_eq!(error.column.as_deref(), Some("Age"));
    assert_eq!(error.property, "age");
    assert_eq!(error.value, "-5");
    assert_eq!(error.message, "neg");
}

#[test]
fn test_case_sensitive_by_default() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Age", "age"));

    let output = parser.parse("name,AGE\nJohn,30").unwrap();

    assert!(output.success.is_empty());
    assert_eq!(output.errors.len(), 2);
    assert!(output.errors.iter().all(|e| e.kind == ErrorKind::Missing));
}

#[test]
fn test_case_insensitive_at_parser_level() {
    let config = ParserConfig::csv().with_case_insensitive_columns(true);
    let parser = Parser::new(config)
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Age", "age").with_transform(transforms::integer));

    let output = parser.parse("name,AGE\nJohn,30").unwrap();

    assert!(!output.has_errors());
    assert_eq!(output.success.len(), 1);
    assert_eq!(output.success[0].get("name"), Some(&Value::String("John".to_string())));
    assert_eq!(output.success[0].get("age"), Some(&Value::Int(30)));
}

#[test]
fn test_case_insensitive_column_override() {
    // Column override wins in both directions over the parser default
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name").with_case_insensitive(true));
    let output = parser.parse("NAME\nJohn").unwrap();
    assert_eq!(output.success.len(), 1);

    let config = ParserConfig::csv().with_case_insensitive_columns(true);
    let parser = Parser::new(config)
        .with_column(Column::new("Name", "name").with_case_insensitive(false));
    let output = parser.parse("NAME\nJohn").unwrap();
    assert!(output.success.is_empty());
    assert_eq!(output.errors[0].kind, ErrorKind::Missing);
}

#[test]
fn test_exact_match_beats_case_insensitive() {
    // Headers "Name" and "name": the exact-case header always wins, even
    // with case-insensitive matching enabled
    let config = ParserConfig::csv().with_case_insensitive_columns(true);
    let parser = Parser::new(config).with_column(Column::new("Name", "who"));

    let output = parser.parse("Name,name\nfirst,second").unwrap();
    assert_eq!(
        output.success[0].get("who"),
        Some(&Value::String("first".to_string()))
    );
}

#[test]
fn test_case_insensitive_reports_original_header_case() {
    let config = ParserConfig::csv().with_case_insensitive_columns(true);
    let parser = Parser::new(config).with_column(
        Column::new("Age", "age").with_transform(transforms::integer),
    );

    let output = parser.parse("AGE\nnope").unwrap();
    assert_eq!(output.errors[0].column.as_deref(), Some("AGE"));
}

#[test]
fn test_alias_priority_order() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Primary", "v").with_alias("Fallback"));

    // Both headers present: the first-listed alias wins
    let output = parser.parse("Fallback,Primary\na,b").unwrap();
    assert_eq!(output.success[0].get("v"), Some(&Value::String("b".to_string())));

    // Only the fallback present: it matches
    let output = parser.parse("Fallback\na").unwrap();
    assert_eq!(output.success[0].get("v"), Some(&Value::String("a".to_string())));
}

#[test]
fn test_missing_column_invariant() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Seen", "seen"))
        .with_column(Column::new("A", "v").with_alias("B"));

    let output = parser.parse("Seen\nx\ny\nz").unwrap();

    // Exactly one missing error per data row, no value contributed anywhere
    assert!(output.success.is_empty());
    assert_eq!(output.errors.len(), 3);
    for (row, error) in output.errors.iter().enumerate() {
        assert_eq!(error.kind, ErrorKind::Missing);
        assert_eq!(error.row, row);
        assert_eq!(error.column.as_deref(), Some("A or B"));
        assert_eq!(error.property, "v");
        assert_eq!(error.message, "Column is missing");
    }
}

#[test]
fn test_missing_column_nullable_and_default() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Nick", "nick").nullable())
        .with_column(Column::new("Age", "age").with_default(18i64));

    let output = parser.parse("Name\nJohn").unwrap();

    assert!(!output.has_errors());
    let record = &output.success[0];
    assert_eq!(record.get("nick"), Some(&Value::Null));
    assert_eq!(record.get("age"), Some(&Value::Int(18)));
}

#[test]
fn test_empty_required_field() {
    let parser = Parser::new(ParserConfig::csv()).with_column(Column::new("Name", "name"));

    let output = parser.parse("Name,Extra\n,x").unwrap();

    assert!(output.success.is_empty());
    let error = &output.errors[0];
    assert_eq!(error.kind, ErrorKind::Validation);
    assert_eq!(error.message, "Required field is empty");
    assert_eq!(error.column.as_deref(), Some("Name"));
}

#[test]
fn test_empty_field_nullable_and_default() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Nick", "nick").nullable())
        .with_column(Column::new("Age", "age").with_default(18i64));

    let output = parser.parse("Nick,Age\n,").unwrap();

    assert!(!output.has_errors());
    let record = &output.success[0];
    assert_eq!(record.get("nick"), Some(&Value::Null));
    assert_eq!(record.get("age"), Some(&Value::Int(18)));
}

#[test]
fn test_trim_default_and_override() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("A", "a"))
        .with_column(Column::new("B", "b").with_trim(false));

    let output = parser.parse("A,B\n  x  ,  y  ").unwrap();

    let record = &output.success[0];
    assert_eq!(record.get("a"), Some(&Value::String("x".to_string())));
    assert_eq!(record.get("b"), Some(&Value::String("  y  ".to_string())));
}

#[test]
fn test_whitespace_only_field_is_empty_after_trim() {
    let parser = Parser::new(ParserConfig::csv()).with_column(Column::new("A", "a"));

    let output = parser.parse("A\n   ").unwrap();
    assert_eq!(output.errors[0].message, "Required field is empty");

    // Without trimming, the whitespace is a value
    let parser = Parser::new(ParserConfig::csv().with_trim(false))
        .with_column(Column::new("A", "a"));
    let output = parser.parse("A\n   ").unwrap();
    assert_eq!(output.success[0].get("a"), Some(&Value::String("   ".to_string())));
}

#[test]
fn test_transform_error_carries_raw_value() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Age", "age").with_transform(transforms::integer));

    let output = parser.parse("Age\nabc").unwrap();

    let error = &output.errors[0];
    assert_eq!(error.kind, ErrorKind::Transform);
    assert_eq!(error.value, "abc");
    assert_eq!(error.message, "'abc' is not a valid integer");
}

#[test]
fn test_row_atomicity() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Age", "age").with_transform(transforms::integer));

    // The name cell is fine but the age cell is not: the row contributes
    // nothing to the success list
    let output = parser.parse("Name,Age\nJohn,abc").unwrap();
    assert!(output.success.is_empty());
    assert_eq!(output.errors.len(), 1);
}

#[test]
fn test_all_columns_evaluated_after_failure() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("A", "a").with_transform(transforms::integer))
        .with_column(Column::new("B", "b").with_transform(transforms::integer));

    let output = parser.parse("A,B\nx,y").unwrap();

    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.errors[0].property, "a");
    assert_eq!(output.errors[1].property, "b");
}

#[test]
fn test_row_validators_gated_by_column_errors() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Age", "age").with_transform(transforms::integer))
        .with_row_validator(|_| Some("always fails".to_string()));

    // Column-level error present: the validator must not run
    let output = parser.parse("Age\nabc").unwrap();
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ErrorKind::Transform);
}

#[test]
fn test_row_validators_all_run_and_accumulate() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_row_validator(|_| Some("first".to_string()))
        .with_row_validator(|_| None)
        .with_row_validator(|_| Some("third".to_string()));

    let output = parser.parse("Name\nJohn").unwrap();

    assert!(output.success.is_empty());
    assert_eq!(output.errors.len(), 2);
    for error in &output.errors {
        assert_eq!(error.kind, ErrorKind::RowValidation);
        assert_eq!(error.column, None);
        assert_eq!(error.property, ROW_PROPERTY);
    }
    assert_eq!(output.errors[0].message, "first");
    assert_eq!(output.errors[1].message, "third");
}

#[test]
fn test_row_validation_error_carries_record_snapshot() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Age", "age").with_transform(transforms::integer))
        .with_row_validator(|record| {
            record
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| *name == "John")
                .map(|_| "no Johns allowed".to_string())
        });

    let output = parser.parse("Name,Age\nJohn,30\nJane,25").unwrap();

    assert_eq!(output.success.len(), 1);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].value, r#"{"name":"John","age":30}"#);
}

#[test]
fn test_row_validator_passes() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Name", "name"))
        .with_row_validator(|_| None);

    let output = parser.parse("Name\nJohn").unwrap();
    assert_eq!(output.success.len(), 1);
    assert!(!output.has_errors());
}

#[test]
fn test_duplicate_headers_resolve_to_first_occurrence() {
    let parser = Parser::new(ParserConfig::csv()).with_column(Column::new("A", "a"));

    let output = parser.parse("A,A\nfirst,second").unwrap();
    assert_eq!(output.success[0].get("a"), Some(&Value::String("first".to_string())));
}

#[test]
fn test_short_row_reads_empty_fields() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("A", "a"))
        .with_column(Column::new("B", "b").nullable());

    let output = parser.parse("A,B\nonly").unwrap();

    let record = &output.success[0];
    assert_eq!(record.get("a"), Some(&Value::String("only".to_string())));
    assert_eq!(record.get("b"), Some(&Value::Null));
}

#[test]
fn test_row_indices_count_blank_lines_when_kept() {
    let config = ParserConfig::csv().with_skip_empty_lines(false);
    let parser = Parser::new(config)
        .with_column(Column::new("Age", "age").with_transform(transforms::integer).nullable());

    // The blank line occupies row slot 1, so the bad row is index 2
    let output = parser.parse("Age\n1\n\nx").unwrap();
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].row, 2);
}

#[test]
fn test_errors_ordered_by_row_then_column() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("A", "a").with_transform(transforms::integer))
        .with_column(Column::new("B", "b").with_transform(transforms::integer));

    let output = parser.parse("A,B\nx,y\n1,2\nz,3").unwrap();

    let positions: Vec<(usize, &str)> = output
        .errors
        .iter()
        .map(|e| (e.row, e.property.as_str()))
        .collect();
    assert_eq!(positions, vec![(0, "a"), (0, "b"), (2, "a")]);
    assert_eq!(output.success.len(), 1);
}

#[test]
fn test_multi_character_delimiter_end_to_end() {
    let parser = Parser::new(ParserConfig::csv().with_delimiter("::"))
        .with_column(Column::new("Name", "name"))
        .with_column(Column::new("Value", "value").with_transform(transforms::integer));

    let output = parser.parse("Name::Value\nJohn::123").unwrap();
    assert_eq!(output.success[0].get("value"), Some(&Value::Int(123)));
}

#[test]
fn test_quoted_field_end_to_end() {
    let parser = Parser::new(ParserConfig::csv())
        .with_column(Column::new("Quote", "quote"));

    let output = parser.parse("Quote\n\"said \"\"hi\"\", then left\"").unwrap();
    assert_eq!(
        output.success[0].get("quote"),
        Some(&Value::String("said \"hi\", then left".to_string()))
    );
}

#[test]
fn test_empty_delimiter_rejected() {
    let parser = Parser::new(ParserConfig::csv().with_delimiter(""))
        .with_column(Column::new("A", "a"));

    match parser.parse("A\n1") {
        Err(Error::InvalidConfig(message)) => assert!(message.contains("delimiter")),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_empty_input_produces_empty_output() {
    let parser = Parser::new(ParserConfig::csv()).with_column(Column::new("A", "a"));

    let output = parser.parse("").unwrap();
    assert!(output.success.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn test_error_kind_serialization() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::RowValidation).unwrap(),
        r#""row-validation""#
    );
    assert_eq!(serde_json::to_string(&ErrorKind::Missing).unwrap(), r#""missing""#);
}

#[test]
fn test_record_serializes_in_declaration_order() {
    let mut record = Record::new();
    record.insert("b", Value::Int(2));
    record.insert("a", Value::Null);
    record.insert("c", Value::Bool(true));
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"b":2,"a":null,"c":true}"#
    );
}
