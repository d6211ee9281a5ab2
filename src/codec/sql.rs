// ============================================================================
// SQL Driver Codec
// Scanning driver column values into Value and back
// ============================================================================

use super::{decode_float, report, Format};
use crate::interfaces::{ConversionObserver, NoOpObserver};
use crate::numeric::{NumericError, NumericResult, Value};

/// Values a SQL driver hands over for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Driver-level type name, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int64",
            SqlValue::Float(_) => "float64",
            SqlValue::Text(_) => "string",
            SqlValue::Bytes(_) => "bytes",
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

/// Scan a driver value.
///
/// Accepts float64, int64, string and bytes. Text may be wrapped in one
/// matching pair of `"` or `'` quotes, which is removed before parsing.
///
/// # Errors
/// - `UnsupportedSourceType` for null, bool and timestamp values
/// - `Parse` for text that is not a decimal (including malformed quoting)
pub fn scan(source: &SqlValue) -> NumericResult<Value> {
    scan_observed(source, &NoOpObserver)
}

/// `scan` reporting lossy floats and rejections to `observer`.
pub fn scan_observed(source: &SqlValue, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    let result = match source {
        SqlValue::Float(f) => decode_float(Format::Sql, *f, observer),
        SqlValue::Int(i) => Ok(Value::from_i64(*i)),
        SqlValue::Text(text) => Value::parse(strip_quotes(text)),
        SqlValue::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => Value::parse(strip_quotes(text)),
            Err(_) => Err(NumericError::parse(&String::from_utf8_lossy(bytes))),
        },
        other => Err(NumericError::UnsupportedSourceType {
            format: Format::Sql,
            found: other.kind(),
        }),
    };
    report(Format::Sql, result, observer)
}

/// Outbound driver value: always the canonical decimal string.
pub fn driver_value(value: &Value) -> SqlValue {
    SqlValue::Text(value.to_string())
}

/// Remove exactly one pair of matching wrapping quotes.
///
/// Anything else (a lone quote, mismatched quotes, doubled quotes) is left in
/// place so the decimal parser rejects it.
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close))
            if bytes.len() >= 2 && open == close && (open == b'"' || open == b'\'') =>
        {
            &text[1..text.len() - 1]
        },
        _ => text,
    }
}
