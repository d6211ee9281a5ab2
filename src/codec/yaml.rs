// ============================================================================
// YAML Codec
// Scalar nodes from human-edited configuration files
// ============================================================================
//
// Accepts string and numeric scalars. Integer nodes are exact; fractional
// nodes have already been typed as floats by the YAML parser, so quote amounts
// (`price: "12.50"`) to keep every digit and the original scale.

use super::{decode_float, report, Format};
use crate::interfaces::{ConversionObserver, NoOpObserver};
use crate::numeric::{NumericError, NumericResult, Value};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serializer};
use serde_yaml::Value as Node;

/// Decode a YAML node.
///
/// # Errors
/// - `UnsupportedSourceType` for null, bool, sequence, mapping and tagged nodes
/// - `Parse` for string scalars that are not decimals
/// - `NonFinite` for `.nan` and `.inf`
pub fn decode(node: &Node) -> NumericResult<Value> {
    decode_observed(node, &NoOpObserver)
}

/// `decode` reporting lossy floats and rejections to `observer`.
pub fn decode_observed(node: &Node, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    let result = match node {
        Node::String(text) => Value::parse(text),
        Node::Number(number) => {
            if let Some(i) = number.as_i64() {
                Ok(Value::from_i64(i))
            } else if let Some(u) = number.as_u64() {
                Ok(Value::from_decimal(Decimal::from(u)))
            } else {
                match number.as_f64() {
                    Some(f) => decode_float(Format::Yaml, f, observer),
                    None => Err(NumericError::parse(&number.to_string())),
                }
            }
        },
        other => Err(NumericError::UnsupportedSourceType {
            format: Format::Yaml,
            found: node_kind(other),
        }),
    };
    report(Format::Yaml, result, observer)
}

/// String scalar holding the canonical text.
pub fn encode(value: &Value) -> Node {
    Node::String(value.to_string())
}

/// Serde `serialize_with` hook.
pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Serde `deserialize_with` hook; stricter than the blanket `Deserialize`
/// impl, which also takes null as zero.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    let node = Node::deserialize(deserializer)?;
    decode(&node).map_err(de::Error::custom)
}

fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Null => "null",
        Node::Bool(_) => "bool",
        Node::Number(_) => "number",
        Node::String(_) => "string",
        Node::Sequence(_) => "sequence",
        Node::Mapping(_) => "mapping",
        Node::Tagged(_) => "tagged",
    }
}
