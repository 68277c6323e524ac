//! Ready-made transform functions for common field types.
//!
//! Each function (or the closure a factory returns) follows the transform
//! contract: raw string in, typed [`Value`] out, failure as a message
//! string. Plain functions like [`integer`] can be passed to
//! [`Column::with_transform`](super::column::Column::with_transform)
//! directly.

use super::value::Value;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a 64-bit signed integer.
pub fn integer(value: &str) -> Result<Value, String> {
    value
        .trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| format!("'{value}' is not a valid integer"))
}

/// Parse a 64-bit floating point number.
pub fn float(value: &str) -> Result<Value, String> {
    fast_float2::parse::<f64, _>(value.trim())
        .map(Value::Float)
        .map_err(|_| format!("'{value}' is not a valid number"))
}

/// Parse a boolean from common truth words (case-insensitive):
/// `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`.
pub fn boolean(value: &str) -> Result<Value, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
        "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
        _ => Err(format!("'{value}' is not a valid boolean")),
    }
}

/// Parse a calendar date with the given `chrono` format string; the time
/// component of the resulting value is midnight.
pub fn date(format: impl Into<String>) -> impl Fn(&str) -> Result<Value, String> {
    let format = format.into();
    move |value| {
        NaiveDate::parse_from_str(value.trim(), &format)
            .map(|date| Value::DateTime(date.and_time(NaiveTime::MIN)))
            .map_err(|e| format!("'{value}' is not a valid date: {e}"))
    }
}

/// Parse a date/time with the given `chrono` format string.
pub fn datetime(format: impl Into<String>) -> impl Fn(&str) -> Result<Value, String> {
    let format = format.into();
    move |value| {
        NaiveDateTime::parse_from_str(value.trim(), &format)
            .map(Value::DateTime)
            .map_err(|e| format!("'{value}' is not a valid date/time: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(integer("42"), Ok(Value::Int(42)));
        assert_eq!(integer(" -7 "), Ok(Value::Int(-7)));
        assert!(integer("4.2").is_err());
        assert!(integer("abc").is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(float("4.25"), Ok(Value::Float(4.25)));
        assert_eq!(float("-3"), Ok(Value::Float(-3.0)));
        assert!(float("four").is_err());
    }

    #[test]
    fn test_boolean_truth_words() {
        for word in ["true", "TRUE", "1", "yes", "on"] {
            assert_eq!(boolean(word), Ok(Value::Bool(true)), "{word}");
        }
        for word in ["false", "False", "0", "no", "off"] {
            assert_eq!(boolean(word), Ok(Value::Bool(false)), "{word}");
        }
        assert!(boolean("maybe").is_err());
    }

    #[test]
    fn test_date_and_datetime() {
        let parse_date = date("%Y-%m-%d");
        let value = parse_date("2024-02-29").unwrap();
        assert_eq!(
            value.as_datetime().unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2024-02-29 00:00"
        );
        assert!(parse_date("not a date").is_err());

        let parse_dt = datetime("%Y-%m-%d %H:%M:%S");
        let value = parse_dt("2024-02-29 13:30:00").unwrap();
        assert_eq!(value.as_datetime().unwrap().format("%H:%M").to_string(), "13:30");
    }
}
