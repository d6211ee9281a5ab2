// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic and codec decoding
// ============================================================================

use crate::codec::Format;
use std::fmt;

/// Errors that can occur while building, computing with, or decoding a `Value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a decimal number
    Parse { input: String },
    /// Decoder was handed a source shape it does not accept
    UnsupportedSourceType { format: Format, found: &'static str },
    /// Typed binary document element tag is not a numeric subtype we accept
    UnsupportedWireType { tag: u8 },
    /// Attempted division by zero
    DivisionByZero,
    /// Exact result does not fit the decimal engine
    Overflow,
    /// NaN or infinity where a finite decimal is required
    NonFinite,
    /// Cash rounding interval outside 5, 10, 25, 50, 100
    InvalidCashInterval(u8),
    /// Raw element payload has the wrong length for its tag
    InvalidPayload {
        tag: u8,
        expected: usize,
        actual: usize,
    },
    /// Fixed-width binary encoding is malformed
    InvalidBinary { reason: &'static str },
}

impl NumericError {
    pub(crate) fn parse(input: &str) -> Self {
        NumericError::Parse {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Parse { input } => {
                write!(f, "invalid input: could not parse {:?} as a decimal", input)
            },
            NumericError::UnsupportedSourceType { format, found } => {
                write!(f, "unsupported {} source type: {}", format, found)
            },
            NumericError::UnsupportedWireType { tag } => {
                write!(f, "unsupported wire type: 0x{:02x}", tag)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => write!(
                f,
                "arithmetic overflow: exact result exceeds decimal range"
            ),
            NumericError::NonFinite => write!(f, "value is not a finite number"),
            NumericError::InvalidCashInterval(interval) => write!(
                f,
                "invalid cash interval {}: expected 5, 10, 25, 50 or 100",
                interval
            ),
            NumericError::InvalidPayload {
                tag,
                expected,
                actual,
            } => write!(
                f,
                "invalid payload for wire type 0x{:02x}: expected {} bytes, got {}",
                tag, expected, actual
            ),
            NumericError::InvalidBinary { reason } => {
                write!(f, "invalid binary value: {}", reason)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
