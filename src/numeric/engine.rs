// ============================================================================
// Decimal Engine
// Contract over rust_decimal: exact construction, parsing and rounding modes
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale (fractional digits) the engine can hold.
pub const MAX_SCALE: u32 = 28;

/// Largest coefficient magnitude the engine can hold (2^96 - 1).
pub const MAX_COEFFICIENT: u128 = (1u128 << 96) - 1;

// ============================================================================
// Rounding Modes
// ============================================================================

/// Rounding modes supported by `Value::round_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// 2.345 -> 2.35, -2.345 -> -2.35 (default display rounding)
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 2.345 -> 2.34, 2.355 -> 2.36
    HalfEven,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Truncation
    TowardZero,
    /// Any discarded non-zero digit bumps the magnitude
    AwayFromZero,
}

impl RoundingMode {
    /// The engine strategy implementing this mode.
    #[inline]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::TowardZero => RoundingStrategy::ToZero,
            RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
        }
    }
}

// ============================================================================
// Cash Intervals
// ============================================================================

/// Smallest physical denomination used by cash rounding, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CashInterval {
    /// 0.05
    Five,
    /// 0.10
    Ten,
    /// 0.25
    TwentyFive,
    /// 0.50
    Fifty,
    /// 1.00
    Hundred,
}

impl CashInterval {
    /// Interval in minor units (5 for 0.05).
    pub const fn minor_units(self) -> u8 {
        match self {
            CashInterval::Five => 5,
            CashInterval::Ten => 10,
            CashInterval::TwentyFive => 25,
            CashInterval::Fifty => 50,
            CashInterval::Hundred => 100,
        }
    }

    /// How many intervals fit in one major unit.
    const fn per_unit(self) -> i64 {
        100 / self.minor_units() as i64
    }

    /// Round `value` to the nearest multiple of this interval, ties away from zero.
    pub(crate) fn round(self, value: Decimal) -> NumericResult<Decimal> {
        let factor = Decimal::from(self.per_unit());
        let scaled = value
            .checked_mul(factor)
            .ok_or(NumericError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let rounded = scaled.checked_div(factor).ok_or(NumericError::Overflow)?;
        Ok(rounded.round_dp_with_strategy(2, RoundingStrategy::ToZero))
    }
}

impl TryFrom<u8> for CashInterval {
    type Error = NumericError;

    fn try_from(minor_units: u8) -> Result<Self, Self::Error> {
        match minor_units {
            5 => Ok(CashInterval::Five),
            10 => Ok(CashInterval::Ten),
            25 => Ok(CashInterval::TwentyFive),
            50 => Ok(CashInterval::Fifty),
            100 => Ok(CashInterval::Hundred),
            other => Err(NumericError::InvalidCashInterval(other)),
        }
    }
}

// ============================================================================
// Exact Construction
// ============================================================================

/// Build `coefficient × 10^-scale` without losing digits.
///
/// Trailing zeros are folded into the scale when the engine would otherwise
/// be out of range; a negative scale is expanded into the coefficient.
///
/// # Errors
/// Returns `Overflow` if the exact value cannot be held by the engine.
pub fn decimal_from_parts(mut coefficient: i128, mut scale: i64) -> NumericResult<Decimal> {
    if coefficient == 0 {
        return Decimal::try_from_i128_with_scale(0, scale.clamp(0, MAX_SCALE as i64) as u32)
            .map_err(|_| NumericError::Overflow);
    }

    while scale > 0
        && coefficient % 10 == 0
        && (scale > MAX_SCALE as i64 || coefficient.unsigned_abs() > MAX_COEFFICIENT)
    {
        coefficient /= 10;
        scale -= 1;
    }

    if scale > MAX_SCALE as i64 {
        return Err(NumericError::Overflow);
    }

    while scale < 0 {
        coefficient = coefficient.checked_mul(10).ok_or(NumericError::Overflow)?;
        scale += 1;
    }

    if coefficient.unsigned_abs() > MAX_COEFFICIENT {
        return Err(NumericError::Overflow);
    }

    Decimal::try_from_i128_with_scale(coefficient, scale as u32).map_err(|_| NumericError::Overflow)
}

// ============================================================================
// Signed-Place Rounding
// ============================================================================

/// Round to `places` fractional digits; negative `places` round to tens,
/// hundreds and so on (`-2` rounds 1250 to 1300 half away from zero).
///
/// # Errors
/// Returns `Overflow` if the rounded value exceeds the engine range, which
/// can only happen for negative `places`.
pub fn round_places(value: Decimal, places: i32, mode: RoundingMode) -> NumericResult<Decimal> {
    if places >= 0 {
        return Ok(value.round_dp_with_strategy(places as u32, mode.strategy()));
    }

    let digits = places.unsigned_abs();
    let integer = value.trunc();
    let whole = integer.mantissa() / 10i128.pow(integer.scale());
    let sticky = !value.fract().is_zero();

    // |whole| < 10^29, so a power of ten above i128 leaves quotient 0 and
    // the whole value as remainder.
    let power = 10i128.checked_pow(digits);
    let (quotient, remainder) = match power {
        Some(p) => (whole / p, whole % p),
        None => (0, whole),
    };

    let discarded_zero = remainder == 0 && !sticky;
    let negative = value.is_sign_negative();
    let half = match power {
        Some(p) => {
            let r = remainder.abs();
            match r.cmp(&(p - r)) {
                Ordering::Equal if sticky => Ordering::Greater,
                other => other,
            }
        },
        None => Ordering::Less,
    };

    let bump = !discarded_zero
        && match mode {
            RoundingMode::TowardZero => false,
            RoundingMode::AwayFromZero => true,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfAwayFromZero => half != Ordering::Less,
            RoundingMode::HalfEven => {
                half == Ordering::Greater || (half == Ordering::Equal && quotient % 2 != 0)
            },
        };

    let step = if negative { -1 } else { 1 };
    let rounded = if bump { quotient + step } else { quotient };
    decimal_from_parts(rounded, -(digits as i64))
}

// ============================================================================
// String Parsing
// ============================================================================

/// Parse decimal text exactly.
///
/// Accepted: optional sign, digits with at most one `.`, optional exponent.
/// - "123" -> 123
/// - "-0.50" -> -0.50 (scale kept)
/// - "1.5e3" -> 1500
/// - ".5" -> 0.5
pub fn parse_decimal(input: &str) -> NumericResult<Decimal> {
    let invalid = || NumericError::parse(input);

    let (mantissa, exponent) = match input.find(['e', 'E']) {
        Some(pos) => (&input[..pos], Some(&input[pos + 1..])),
        None => (input, None),
    };

    let (negative, digits) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };

    let (int_str, frac_str) = match digits.find('.') {
        Some(pos) => (&digits[..pos], &digits[pos + 1..]),
        None => (digits, ""),
    };

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }

    if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Digits that no longer fit the accumulator may only be trailing zeros;
    // those are dropped and folded into the scale.
    let digits = int_str.as_bytes().iter().chain(frac_str.as_bytes());
    let total = int_str.len() + frac_str.len();
    let mut coefficient: i128 = 0;
    let mut dropped: usize = 0;
    for (i, &byte) in digits.enumerate() {
        match coefficient
            .checked_mul(10)
            .and_then(|c| c.checked_add((byte - b'0') as i128))
        {
            Some(next) => coefficient = next,
            None => {
                let mut rest = int_str.bytes().chain(frac_str.bytes()).skip(i);
                if rest.all(|b| b == b'0') {
                    dropped = total - i;
                    break;
                }
                return Err(NumericError::Overflow);
            },
        }
    }
    if negative {
        coefficient = -coefficient;
    }

    let exponent: i64 = match exponent {
        None => 0,
        Some(text) => {
            let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
            if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            text.parse().map_err(|_| NumericError::Overflow)?
        },
    };

    let scale = (frac_str.len() as i64 - dropped as i64)
        .checked_sub(exponent)
        .ok_or(NumericError::Overflow)?;

    decimal_from_parts(coefficient, scale)
}

// ============================================================================
// Checked Arithmetic
// ============================================================================

/// Addition that fails instead of dropping fractional digits.
///
/// Near the top of its range the engine rescales a sum to fewer fractional
/// digits. The result is exact only if neither operand had non-zero digits
/// past the result's scale.
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let sum = lhs.checked_add(rhs).ok_or(NumericError::Overflow)?;
    ensure_exact(sum, lhs, rhs)
}

/// Subtraction with the same exactness guarantee as `checked_add`.
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let difference = lhs.checked_sub(rhs).ok_or(NumericError::Overflow)?;
    ensure_exact(difference, lhs, rhs)
}

fn ensure_exact(result: Decimal, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let scale = result.scale();
    let fits = |d: Decimal| {
        d.scale() <= scale || d.round_dp_with_strategy(scale, RoundingStrategy::ToZero) == d
    };
    if fits(lhs) && fits(rhs) {
        Ok(result)
    } else {
        Err(NumericError::Overflow)
    }
}

/// Division that distinguishes a zero divisor from an out-of-range quotient.
pub fn checked_div(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    if rhs.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(NumericError::Overflow)
}

/// Remainder with the same error split as `checked_div`.
pub fn checked_rem(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    if rhs.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    lhs.checked_rem(rhs).ok_or(NumericError::Overflow)
}

// ============================================================================
// Tests
// ============================================================================
