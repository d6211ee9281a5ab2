// ============================================================================
// Value Property Tests
// Canonical text, arithmetic and adapter round trips under proptest
// ============================================================================

use money_value::codec::{sql, text};
use money_value::{RoundingMode, Value};
use proptest::prelude::*;

/// Canonical decimal text: no leading zeros, no '+', no exponent.
fn canonical_decimal() -> impl Strategy<Value = String> {
    "-?(0|[1-9][0-9]{0,14})(\\.[0-9]{1,12})?".prop_filter("negative zero is not canonical", |s| {
        !(s.starts_with('-') && s.bytes().all(|b| matches!(b, b'-' | b'0' | b'.')))
    })
}

fn value() -> impl Strategy<Value = money_value::Value> {
    canonical_decimal().prop_map(|s| Value::parse(&s).unwrap())
}

/// Nonzero divisors with at most two fractional digits.
fn divisor() -> impl Strategy<Value = money_value::Value> {
    "-?[1-9][0-9]{0,5}(\\.[0-9]{1,2})?".prop_map(|s| Value::parse(&s).unwrap())
}

proptest! {
    #[test]
    fn prop_canonical_text_round_trip(s in canonical_decimal()) {
        let parsed = Value::parse(&s).unwrap();
        prop_assert_eq!(parsed.to_string(), s.clone());
        prop_assert_eq!(text::encode(&parsed), s.clone());
        prop_assert_eq!(parsed.raw_text(), Some(s.as_str()));
    }

    #[test]
    fn prop_add_then_sub_is_identity(a in value(), b in value()) {
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_negation_is_symmetric(a in value()) {
        prop_assert_eq!(-(-a.clone()), a.clone());
        prop_assert!(a.add(&-&a).unwrap().is_zero());
    }

    #[test]
    fn prop_round_bounds_fraction_digits(a in value(), places in -8i32..8) {
        for mode in [
            RoundingMode::HalfAwayFromZero,
            RoundingMode::HalfEven,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::TowardZero,
            RoundingMode::AwayFromZero,
        ] {
            let rounded = a.round_with(places, mode).unwrap();
            if places >= 0 {
                prop_assert!(rounded.exponent() >= -places);
            } else {
                let unit = Value::from_parts(1, -places).unwrap();
                prop_assert!(rounded.rem(&unit).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn prop_floor_and_ceil_bracket(a in value(), places in -8i32..8) {
        prop_assert!(a.round_floor(places).unwrap() <= a);
        prop_assert!(a.round_ceil(places).unwrap() >= a);
        prop_assert!(a.truncate(places).unwrap().abs() <= a.abs());
    }

    #[test]
    fn prop_quo_rem_reconstructs(a in value(), b in divisor(), precision in -2i32..6) {
        let (q, r) = a.quo_rem(&b, precision).unwrap();
        prop_assert_eq!(b.mul(&q).unwrap().add(&r).unwrap(), a.clone());
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    }

    #[test]
    fn prop_binary_round_trip(a in value()) {
        use money_value::codec::binary;

        let decoded = binary::decode(&binary::encode(&a)).unwrap();
        prop_assert_eq!(decoded.to_string(), a.to_string());
    }

    #[test]
    fn prop_sql_driver_round_trip(a in value()) {
        let scanned = sql::scan(&sql::driver_value(&a)).unwrap();
        prop_assert_eq!(scanned.to_string(), a.to_string());
    }
}

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn prop_json_round_trip(a in value()) {
        use money_value::codec::json;

        let decoded = json::decode(&json::encode(&a)).unwrap();
        prop_assert_eq!(decoded.to_string(), a.to_string());

        let via_serde: Value = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
        prop_assert_eq!(via_serde, a);
    }
}

#[cfg(feature = "bson")]
proptest! {
    #[test]
    fn prop_bson_decimal128_round_trip(a in value()) {
        use money_value::codec::document;

        let decoded = document::decode(&document::encode(&a).unwrap()).unwrap();
        prop_assert_eq!(decoded.to_string(), a.to_string());

        let (tag, payload) = document::encode_raw(&a).unwrap();
        prop_assert_eq!(document::decode_raw(tag, &payload).unwrap().to_string(), a.to_string());
    }
}
