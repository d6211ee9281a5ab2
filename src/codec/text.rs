// ============================================================================
// Plain Text Codec
// ============================================================================

use super::{report, Format};
use crate::interfaces::ConversionObserver;
use crate::numeric::{NumericError, NumericResult, Value};

/// Parse decimal text; the input becomes the value's raw text.
pub fn decode(text: &str) -> NumericResult<Value> {
    Value::parse(text)
}

/// `decode` reporting rejections to `observer`.
pub fn decode_observed(text: &str, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    report(Format::Text, Value::parse(text), observer)
}

/// Canonical decimal string, unquoted.
pub fn encode(value: &Value) -> String {
    value.to_string()
}

/// Byte-oriented variant for text marshalling interfaces.
pub fn decode_bytes(bytes: &[u8]) -> NumericResult<Value> {
    match std::str::from_utf8(bytes) {
        Ok(text) => decode(text),
        Err(_) => Err(NumericError::parse(&String::from_utf8_lossy(bytes))),
    }
}
