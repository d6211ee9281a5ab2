// ============================================================================
// JSON Codec
// Serde impls for Value plus a lossless raw-token decode/encode pair
// ============================================================================
//
// Encoding always produces a quoted decimal string ("12.50"). Decoding accepts
// a quoted string, a bare number token, or null (which becomes zero).
//
// The serde path sees numbers after the deserializer has already typed them,
// so a fractional bare number arrives as f64 and goes through the lossy float
// conversion. `decode` works on the token text itself and keeps every digit.

use super::{report, Format};
use crate::interfaces::{ConversionEvent, ConversionObserver, NoOpObserver};
use crate::numeric::{NumericError, NumericResult, Value};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = crate::numeric::Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string, a number, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Value::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::from_i64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Value::from_decimal(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Value::from_f64(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Value::deserialize(deserializer)
    }
}

// ============================================================================
// Raw Tokens
// ============================================================================

/// Decode a single JSON token: `"12.50"`, `12.50` or `null`.
///
/// Bare number tokens are parsed from their text, so `0.10000000000000000001`
/// keeps all of its digits. The raw text of the result is the string content
/// or the number token; `null` yields zero with no raw text.
///
/// # Errors
/// - `Parse` if the token is not valid JSON or a string that is not a decimal
/// - `UnsupportedSourceType` for booleans, arrays and objects
pub fn decode(token: &str) -> NumericResult<Value> {
    decode_observed(token, &NoOpObserver)
}

/// `decode` reporting null coercion and rejections to `observer`.
pub fn decode_observed(token: &str, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    let token = token.trim_matches([' ', '\t', '\n', '\r']);
    let result = match serde_json::from_str::<serde_json::Value>(token) {
        Ok(serde_json::Value::Null) => {
            observer.on_event(ConversionEvent::NullAsZero {
                format: Format::Json,
            });
            Ok(Value::ZERO)
        },
        Ok(serde_json::Value::String(text)) => Value::parse(&text),
        Ok(serde_json::Value::Number(_)) => Value::parse(token),
        Ok(other) => Err(NumericError::UnsupportedSourceType {
            format: Format::Json,
            found: json_kind(&other),
        }),
        Err(_) => Err(NumericError::parse(token)),
    };
    report(Format::Json, result, observer)
}

/// Quoted canonical string, e.g. `"12.50"`.
pub fn encode(value: &Value) -> String {
    // Canonical text is only digits, '-' and '.', so no escaping is needed.
    format!("\"{}\"", value)
}

/// Bare number token, e.g. `12.50`, for consumers that expect JSON numbers.
pub fn encode_bare(value: &Value) -> String {
    value.to_string()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
