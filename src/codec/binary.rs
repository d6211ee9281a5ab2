// ============================================================================
// Binary Codec
// Fixed 16-byte engine encoding for binary marshalling interfaces
// ============================================================================
//
// Layout (little-endian words):
//   bytes 0-1   zero
//   byte  2     scale, 0..=28
//   byte  3     sign in the top bit, other bits zero
//   bytes 4-15  96-bit coefficient, low word first

use super::{report, Format};
use crate::interfaces::ConversionObserver;
use crate::numeric::{NumericError, NumericResult, Value};
use rust_decimal::Decimal;

/// Encoded length of every value.
pub const BINARY_LEN: usize = 16;

const SIGN_BYTE_RESERVED: u8 = 0x7f;

/// Sixteen bytes holding the exact coefficient, scale and sign.
pub fn encode(value: &Value) -> [u8; BINARY_LEN] {
    value.decimal().serialize()
}

/// Decode bytes produced by `encode`.
///
/// Rejects any length other than 16, set reserved flag bits, and scales
/// above 28 instead of letting the engine clamp them.
pub fn decode(bytes: &[u8]) -> NumericResult<Value> {
    let bytes: [u8; BINARY_LEN] = bytes
        .try_into()
        .map_err(|_| NumericError::InvalidBinary {
            reason: "expected 16 bytes",
        })?;

    if bytes[0] != 0 || bytes[1] != 0 || bytes[3] & SIGN_BYTE_RESERVED != 0 {
        return Err(NumericError::InvalidBinary {
            reason: "reserved flag bits set",
        });
    }
    if u32::from(bytes[2]) > Decimal::MAX_SCALE {
        return Err(NumericError::InvalidBinary {
            reason: "scale out of range",
        });
    }

    Ok(Value::from_decimal(Decimal::deserialize(bytes)))
}

/// `decode` reporting rejections to `observer`.
pub fn decode_observed(bytes: &[u8], observer: &dyn ConversionObserver) -> NumericResult<Value> {
    report(Format::Binary, decode(bytes), observer)
}
