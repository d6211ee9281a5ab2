// ============================================================================
// Typed Binary Document Codec (BSON)
// Numeric element subtypes in, Decimal128 out
// ============================================================================
//
// Accepted element types:
// - 0x13 Decimal128  exact, via its canonical string form
// - 0x10 Int32       exact
// - 0x12 Int64       exact
// - 0x01 Double      lossy, via the float conversion
//
// Encoding always writes Decimal128, even for integral values.

use super::{decode_float, report, Format};
use crate::interfaces::{ConversionObserver, NoOpObserver};
use crate::numeric::engine::parse_decimal;
use crate::numeric::{NumericError, NumericResult, Value};
use bson::{Bson, Decimal128};

/// Element type tags
pub const TAG_DOUBLE: u8 = 0x01;
pub const TAG_INT32: u8 = 0x10;
pub const TAG_INT64: u8 = 0x12;
pub const TAG_DECIMAL128: u8 = 0x13;

// ============================================================================
// Element Dispatch
// ============================================================================

/// Decode a BSON element.
///
/// # Errors
/// - `UnsupportedWireType` for any non-numeric element
/// - `NonFinite` for Decimal128/Double infinities and NaN
/// - `Overflow` for Decimal128 values outside the engine range
pub fn decode(element: &Bson) -> NumericResult<Value> {
    decode_observed(element, &NoOpObserver)
}

/// `decode` reporting lossy doubles and rejections to `observer`.
pub fn decode_observed(element: &Bson, observer: &dyn ConversionObserver) -> NumericResult<Value> {
    let result = match element {
        Bson::Decimal128(d) => from_decimal128(d),
        Bson::Int32(i) => Ok(Value::from_i32(*i)),
        Bson::Int64(i) => Ok(Value::from_i64(*i)),
        Bson::Double(f) => decode_float(Format::Document, *f, observer),
        other => Err(NumericError::UnsupportedWireType {
            tag: other.element_type() as u8,
        }),
    };
    report(Format::Document, result, observer)
}

/// Encode as a Decimal128 element.
pub fn encode(value: &Value) -> NumericResult<Bson> {
    to_decimal128(value).map(Bson::Decimal128)
}

/// Exact Decimal128 for a value.
///
/// Engine values carry at most 29 digits, well inside Decimal128's 34, so
/// the conversion never rounds.
pub fn to_decimal128(value: &Value) -> NumericResult<Decimal128> {
    let text = value.to_string();
    text.parse::<Decimal128>()
        .map_err(|_| NumericError::parse(&text))
}

/// Finite Decimal128 -> Value.
///
/// # Errors
/// - `NonFinite` for infinities and NaN
/// - `Overflow` if the exponent or digits exceed the engine range
pub fn from_decimal128(decimal: &Decimal128) -> NumericResult<Value> {
    let text = decimal.to_string();
    if matches!(text.trim_start_matches('-'), "Infinity" | "NaN") {
        return Err(NumericError::NonFinite);
    }
    parse_decimal(&text).map(Value::from_decimal)
}

// ============================================================================
// Raw Element Payloads
// ============================================================================

/// Decode a raw element payload given its type tag.
///
/// # Errors
/// - `UnsupportedWireType` for tags other than the four numeric ones
/// - `InvalidPayload` if the payload length does not match the tag
pub fn decode_raw(tag: u8, payload: &[u8]) -> NumericResult<Value> {
    match tag {
        TAG_DECIMAL128 => from_decimal128(&Decimal128::from_bytes(fixed::<16>(tag, payload)?)),
        TAG_INT32 => Ok(Value::from_i32(i32::from_le_bytes(fixed::<4>(tag, payload)?))),
        TAG_INT64 => Ok(Value::from_i64(i64::from_le_bytes(fixed::<8>(tag, payload)?))),
        TAG_DOUBLE => Value::from_f64(f64::from_le_bytes(fixed::<8>(tag, payload)?)),
        other => Err(NumericError::UnsupportedWireType { tag: other }),
    }
}

/// Raw Decimal128 element: tag and little-endian payload.
pub fn encode_raw(value: &Value) -> NumericResult<(u8, [u8; 16])> {
    to_decimal128(value).map(|d| (TAG_DECIMAL128, d.bytes()))
}

fn fixed<const N: usize>(tag: u8, payload: &[u8]) -> NumericResult<[u8; N]> {
    payload
        .try_into()
        .map_err(|_| NumericError::InvalidPayload {
            tag,
            expected: N,
            actual: payload.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{ConversionEvent, RecordingObserver};
    use bson::{doc, Document};

    fn bid(high: u64, low: u64) -> [u8; 16] {
        (((high as u128) << 64) | low as u128).to_le_bytes()
    }

    fn v(s: &str) -> Value {
        Value::parse(s).unwrap()
    }

    fn decode_bid(high: u64, low: u64) -> NumericResult<Value> {
        from_decimal128(&Decimal128::from_bytes(bid(high, low)))
    }

    #[test]
    fn test_encode_matches_reference_vectors() {
        let encoded = |s: &str| to_decimal128(&v(s)).unwrap().bytes();
        assert_eq!(encoded("1"), bid(0x3040_0000_0000_0000, 1));
        assert_eq!(encoded("0"), bid(0x3040_0000_0000_0000, 0));
        assert_eq!(encoded("-1.00"), bid(0xB03C_0000_0000_0000, 100));
        assert_eq!(encoded("0.001"), bid(0x303A_0000_0000_0000, 1));
    }

    #[test]
    fn test_decode_reference_vectors() {
        assert_eq!(decode_bid(0x3040_0000_0000_0000, 1).unwrap().to_string(), "1");
        assert_eq!(decode_bid(0xB03C_0000_0000_0000, 100).unwrap().to_string(), "-1.00");
        // 1E+3 decodes with its exponent expanded
        assert_eq!(decode_bid(0x3046_0000_0000_0000, 1).unwrap().to_string(), "1000");
        // 1.234E-7 is rendered in exponential form by Decimal128
        assert_eq!(
            decode_bid(0x302C_0000_0000_0000, 1234).unwrap().to_string(),
            "0.0000001234"
        );
    }

    #[test]
    fn test_special_values() {
        assert_eq!(decode_bid(0x7800_0000_0000_0000, 0), Err(NumericError::NonFinite));
        assert_eq!(decode_bid(0xF800_0000_0000_0000, 0), Err(NumericError::NonFinite));
        assert_eq!(decode_bid(0x7C00_0000_0000_0000, 0), Err(NumericError::NonFinite));
        // Non-canonical coefficients read as zero
        assert!(decode_bid(0x6C10_0000_0000_0000, 0).unwrap().is_zero());
    }

    #[test]
    fn test_out_of_range() {
        // 1E-40
        assert_eq!(decode_bid(0x2FF0_0000_0000_0000, 1), Err(NumericError::Overflow));
        // 1E+6111
        assert_eq!(
            decode_bid(0x5FFE_0000_0000_0000, 1),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_round_trip_each_tag() {
        let original = v("-1234.5678");
        assert_eq!(decode(&encode(&original).unwrap()).unwrap().to_string(), "-1234.5678");

        let max = v("-79228162514264337593543950335");
        assert_eq!(decode(&encode(&max).unwrap()).unwrap(), max);

        assert_eq!(decode(&Bson::Int32(-42)).unwrap(), Value::from_i32(-42));
        assert_eq!(decode(&Bson::Int64(9_000_000_000)).unwrap(), Value::from_i64(9_000_000_000));
        // Double round trips are lossy in general; short decimals survive
        assert_eq!(decode(&Bson::Double(19.99)).unwrap(), v("19.99"));
    }

    #[test]
    fn test_encode_is_always_decimal128() {
        assert!(matches!(encode(&Value::from_i64(5)), Ok(Bson::Decimal128(_))));
        assert_eq!(encode_raw(&Value::from_i64(5)).unwrap().0, TAG_DECIMAL128);
    }

    #[test]
    fn test_unsupported_elements() {
        assert_eq!(
            decode(&Bson::String("12.50".to_string())),
            Err(NumericError::UnsupportedWireType { tag: 0x02 })
        );
        assert_eq!(
            decode(&Bson::Boolean(true)),
            Err(NumericError::UnsupportedWireType { tag: 0x08 })
        );
        assert_eq!(
            decode(&Bson::Null),
            Err(NumericError::UnsupportedWireType { tag: 0x0A })
        );
    }

    #[test]
    fn test_document_round_trip() {
        let price = v("19.990");
        let document = doc! { "price": encode(&price).unwrap(), "qty": 3_i32 };

        let mut bytes = Vec::new();
        document.to_writer(&mut bytes).unwrap();
        let back = Document::from_reader(&mut bytes.as_slice()).unwrap();

        let decoded = decode(back.get("price").unwrap()).unwrap();
        assert_eq!(decoded.to_string(), "19.990");
        assert_eq!(decode(back.get("qty").unwrap()).unwrap(), Value::from_i64(3));
    }

    #[test]
    fn test_raw_payloads() {
        let (tag, payload) = encode_raw(&v("0.05")).unwrap();
        assert_eq!(decode_raw(tag, &payload).unwrap().to_string(), "0.05");

        assert_eq!(decode_raw(TAG_INT32, &7_i32.to_le_bytes()).unwrap(), Value::from_i64(7));
        assert_eq!(decode_raw(TAG_INT64, &(-7_i64).to_le_bytes()).unwrap(), Value::from_i64(-7));
        assert_eq!(decode_raw(TAG_DOUBLE, &2.5_f64.to_le_bytes()).unwrap(), v("2.5"));

        assert_eq!(
            decode_raw(TAG_INT32, &[1, 2]),
            Err(NumericError::InvalidPayload {
                tag: TAG_INT32,
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            decode_raw(0x02, b"12"),
            Err(NumericError::UnsupportedWireType { tag: 0x02 })
        );
    }

    #[test]
    fn test_decode_observed_double() {
        let observer = RecordingObserver::default();
        decode_observed(&Bson::Double(0.1), &observer).unwrap();
        assert!(matches!(
            observer.events()[0],
            ConversionEvent::LossyFloat {
                format: Format::Document,
                ..
            }
        ));
    }
}
