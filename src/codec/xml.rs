// ============================================================================
// XML Codec
// Element text and attribute values; output rounded to two digits
// ============================================================================
//
// Use on struct fields with any serde XML backend:
//
//     #[serde(with = "money_value::codec::xml")]
//     total: Value,
//     #[serde(rename = "@amount", with = "money_value::codec::xml")]
//     amount: Value,

use super::{report, Format};
use crate::interfaces::{ConversionObserver, NoOpObserver};
use crate::numeric::{NumericResult, RoundingMode, Value};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Fractional digits written by `encode`.
pub const XML_FRACTION_DIGITS: u32 = 2;

/// Decode unescaped element text or an attribute value.
///
/// Surrounding XML whitespace (from indented documents) is ignored; the
/// trimmed text becomes the raw text.
pub fn decode(text: &str) -> NumericResult<Value> {
    decode_observed(text, &NoOpObserver)
}

/// `decode` reporting rejections to `observer`.
pub fn decode_observed(text: &str, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    let trimmed = text.trim_matches([' ', '\t', '\n', '\r']);
    report(Format::Xml, Value::parse(trimmed), observer)
}

/// Element text: the value rounded half away from zero to two digits.
///
/// Values with fewer digits are not padded (`3.5` stays `3.5`).
pub fn encode(value: &Value) -> String {
    value
        .round_dp(XML_FRACTION_DIGITS, RoundingMode::HalfAwayFromZero)
        .to_string()
}

/// Serde `serialize_with` hook.
pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(value))
}

/// Serde `deserialize_with` hook.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    let text = String::deserialize(deserializer)?;
    decode(&text).map_err(de::Error::custom)
}
