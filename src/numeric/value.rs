// ============================================================================
// Value
// Exact monetary decimal with provenance of the text it was parsed from
// ============================================================================

use super::engine::{self, CashInterval, RoundingMode};
use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::MathematicalOps;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

/// Immutable decimal amount.
///
/// Holds the exact magnitude plus, when the value came from text, that text
/// verbatim. Every operation returns a fresh `Value` without raw text: the raw
/// form answers "what string produced this", not "what does this look like now".
///
/// Equality, ordering and hashing look at the magnitude only, so `12.5` and
/// `12.50` compare equal while still rendering differently.
///
/// # Example
/// ```
/// use money_value::Value;
///
/// let price = Value::parse("10.50")?;
/// let total = price.mul(&Value::from_i64(3))?;
/// assert_eq!(total.to_string(), "31.50");
/// assert_eq!(price.raw_text(), Some("10.50"));
/// assert_eq!(total.raw_text(), None);
/// # Ok::<(), money_value::NumericError>(())
/// ```
#[derive(Clone, Default)]
pub struct Value {
    magnitude: Decimal,
    raw: Option<String>,
}

impl Value {
    /// Zero value
    pub const ZERO: Self = Self::from_decimal(Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self::from_decimal(Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse decimal text, keeping the input as raw text.
    ///
    /// # Errors
    /// - `Parse` if the text is not a decimal number
    /// - `Overflow` if the exact value does not fit the engine (never rounded)
    pub fn parse(text: &str) -> NumericResult<Self> {
        let magnitude = engine::parse_decimal(text)?;
        Ok(Self {
            magnitude,
            raw: Some(text.to_string()),
        })
    }

    /// Wrap an engine decimal.
    #[inline]
    pub const fn from_decimal(magnitude: Decimal) -> Self {
        Self {
            magnitude,
            raw: None,
        }
    }

    /// Create from a 64-bit integer.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self::from_decimal(Decimal::from(value))
    }

    /// Create from a 32-bit integer.
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        Self::from_decimal(Decimal::from(value))
    }

    /// Create from a float.
    ///
    /// Lossy: the float is read through its shortest round-trip rendering, so
    /// `0.1` becomes exactly `0.1`, but values that were never representable
    /// as a double (e.g. `0.1 + 0.2`) keep their binary error.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `Overflow` if the float is outside the engine range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        let magnitude = match engine::parse_decimal(&value.to_string()) {
            Ok(d) => d,
            // Too many digits to hold exactly (e.g. 1e-30); fall back to the
            // engine's own nearest conversion.
            Err(NumericError::Overflow) => {
                Decimal::from_f64_retain(value).ok_or(NumericError::Overflow)?
            },
            Err(e) => return Err(e),
        };
        Ok(Self::from_decimal(magnitude))
    }

    /// Builds `coefficient × 10^exponent` exactly.
    pub fn from_parts(coefficient: i128, exponent: i32) -> NumericResult<Self> {
        engine::decimal_from_parts(coefficient, -(exponent as i64)).map(Self::from_decimal)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The text this value was parsed from, if any.
    #[inline]
    pub fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The underlying engine decimal.
    #[inline]
    pub const fn decimal(&self) -> Decimal {
        self.magnitude
    }

    /// Integer coefficient (`12.50` -> `1250`).
    #[inline]
    pub fn coefficient(&self) -> i128 {
        self.magnitude.mantissa()
    }

    /// Base-10 exponent (`12.50` -> `-2`).
    #[inline]
    pub fn exponent(&self) -> i32 {
        -(self.magnitude.scale() as i32)
    }

    /// Digits in the coefficient (`12.50` -> 4); zero has one digit.
    pub fn num_digits(&self) -> usize {
        self.coefficient()
            .unsigned_abs()
            .checked_ilog10()
            .map_or(1, |d| d as usize + 1)
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.magnitude.is_zero() {
            0
        } else if self.magnitude.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.magnitude.fract().is_zero()
    }

    /// Integer part, truncated toward zero.
    pub fn int_part(&self) -> Self {
        Self::from_decimal(self.magnitude.trunc())
    }

    /// Integer part as i64.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit an i64.
    pub fn to_i64(&self) -> NumericResult<i64> {
        self.magnitude.trunc().to_i64().ok_or(NumericError::Overflow)
    }

    /// Nearest double (lossy).
    pub fn to_f64(&self) -> f64 {
        self.magnitude.to_f64().unwrap_or(f64::NAN)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range or would need more
    /// digits than the engine holds.
    pub fn add(&self, rhs: &Self) -> NumericResult<Self> {
        engine::checked_add(self.magnitude, rhs.magnitude).map(Self::from_decimal)
    }

    /// Exact subtraction; fails like `add`.
    pub fn sub(&self, rhs: &Self) -> NumericResult<Self> {
        engine::checked_sub(self.magnitude, rhs.magnitude).map(Self::from_decimal)
    }

    /// Multiplication.
    ///
    /// Exact unless the product needs more than 28 fractional digits, in which
    /// case the engine rounds the excess digits.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    pub fn mul(&self, rhs: &Self) -> NumericResult<Self> {
        self.magnitude
            .checked_mul(rhs.magnitude)
            .map(Self::from_decimal)
            .ok_or(NumericError::Overflow)
    }

    /// Division to the engine's full precision (28 significant digits for
    /// non-terminating quotients).
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is out of range
    pub fn div(&self, rhs: &Self) -> NumericResult<Self> {
        engine::checked_div(self.magnitude, rhs.magnitude).map(Self::from_decimal)
    }

    /// Division rounded half away from zero to `places` digits.
    pub fn div_round(&self, rhs: &Self, places: i32) -> NumericResult<Self> {
        self.div(rhs)?.round(places)
    }

    /// Quotient truncated to `precision` fractional digits, with remainder.
    ///
    /// `self == rhs * q + r`, where `r` has the sign of `self` and
    /// `|r| < |rhs| * 10^-precision`.
    pub fn quo_rem(&self, rhs: &Self, precision: i32) -> NumericResult<(Self, Self)> {
        let mut quotient = self.div(rhs)?.truncate(precision)?;
        let mut remainder = self.sub(&rhs.mul(&quotient)?)?;

        // The engine may round a long quotient up past the truncation point
        if !remainder.is_zero() && remainder.sign() != self.sign() {
            let step = i128::from(self.sign() * rhs.sign());
            let unit = Self::from_parts(step, precision.saturating_neg())?;
            quotient = quotient.sub(&unit)?;
            remainder = remainder.add(&rhs.mul(&unit)?)?;
        }

        Ok((quotient, remainder))
    }

    /// `self` raised to `exponent`.
    ///
    /// Integer exponents are exact while the result fits the engine; a
    /// fractional exponent uses the engine's series approximation.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power
    /// - `NonFinite` for a negative base with a fractional exponent
    /// - `Overflow` if the result is out of range
    pub fn pow(&self, exponent: &Self) -> NumericResult<Self> {
        if self.is_zero() && exponent.is_negative() {
            return Err(NumericError::DivisionByZero);
        }
        let result = if exponent.is_integer() {
            self.magnitude.checked_powi(exponent.to_i64()?)
        } else {
            if self.is_negative() {
                return Err(NumericError::NonFinite);
            }
            self.magnitude.checked_powd(exponent.magnitude)
        };
        result.map(Self::from_decimal).ok_or(NumericError::Overflow)
    }

    /// Remainder of truncated division; carries the sign of `self`.
    pub fn rem(&self, rhs: &Self) -> NumericResult<Self> {
        engine::checked_rem(self.magnitude, rhs.magnitude).map(Self::from_decimal)
    }

    /// Multiply by `10^places` exactly (negative shifts divide).
    pub fn shift(&self, places: i32) -> NumericResult<Self> {
        let scale = self.magnitude.scale() as i64 - places as i64;
        engine::decimal_from_parts(self.magnitude.mantissa(), scale).map(Self::from_decimal)
    }

    pub fn abs(&self) -> Self {
        Self::from_decimal(self.magnitude.abs())
    }

    pub fn floor(&self) -> Self {
        Self::from_decimal(self.magnitude.floor())
    }

    pub fn ceil(&self) -> Self {
        Self::from_decimal(self.magnitude.ceil())
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `places` fractional digits with the given mode.
    ///
    /// Negative `places` round left of the point: `-2` rounds to hundreds.
    /// Values that already have `places` or fewer digits come back unchanged
    /// (no zero padding; use `string_fixed` for that).
    ///
    /// # Errors
    /// Returns `Overflow` if rounding to a negative place leaves the engine range.
    pub fn round_with(&self, places: i32, mode: RoundingMode) -> NumericResult<Self> {
        engine::round_places(self.magnitude, places, mode).map(Self::from_decimal)
    }

    /// Round to a non-negative number of fractional digits; never fails.
    pub fn round_dp(&self, places: u32, mode: RoundingMode) -> Self {
        Self::from_decimal(self.magnitude.round_dp_with_strategy(places, mode.strategy()))
    }

    /// Round half away from zero: 2.345 -> 2.35.
    pub fn round(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::HalfAwayFromZero)
    }

    /// Banker's rounding: 2.345 -> 2.34.
    pub fn round_bank(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::HalfEven)
    }

    /// Round to the nearest cash denomination, e.g. 3.43 -> 3.45 at 0.05.
    pub fn round_cash(&self, interval: CashInterval) -> NumericResult<Self> {
        interval.round(self.magnitude).map(Self::from_decimal)
    }

    pub fn round_ceil(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::Ceiling)
    }

    pub fn round_floor(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::Floor)
    }

    /// Round away from zero: 1.231 -> 1.24.
    pub fn round_up(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::AwayFromZero)
    }

    /// Round toward zero: -1.239 -> -1.23.
    pub fn round_down(&self, places: i32) -> NumericResult<Self> {
        self.round_with(places, RoundingMode::TowardZero)
    }

    /// Drop digits past `places` without rounding.
    pub fn truncate(&self, places: i32) -> NumericResult<Self> {
        self.round_down(places)
    }

    /// Floor at `places` digits; zero places leaves the value unchanged.
    pub fn floor_with_places(&self, places: u32) -> Self {
        if places == 0 {
            return Self::from_decimal(self.magnitude);
        }
        self.round_dp(places, RoundingMode::Floor)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison of magnitudes.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }

    #[inline]
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    #[inline]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    #[inline]
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    // ========================================================================
    // Fixed Rendering
    // ========================================================================

    /// Round half away from zero and render exactly `places` digits.
    pub fn string_fixed(&self, places: u32) -> String {
        let rounded = self.round_dp(places, RoundingMode::HalfAwayFromZero);
        pad_fraction(&rounded.to_string(), places)
    }

    /// Banker's rounding rendered with exactly `places` digits.
    pub fn string_fixed_bank(&self, places: u32) -> String {
        pad_fraction(&self.round_dp(places, RoundingMode::HalfEven).to_string(), places)
    }

    /// Cash rounding rendered with two digits.
    pub fn string_fixed_cash(&self, interval: CashInterval) -> NumericResult<String> {
        self.round_cash(interval)
            .map(|v| pad_fraction(&v.to_string(), 2))
    }

    /// Rendering at a fixed exponent, truncating toward zero.
    ///
    /// `1.2345` at `-2` is `"1.23"`, at `-6` is `"1.234500"`; `1234` at `2`
    /// is `"1200"`.
    pub fn string_scaled(&self, exponent: i32) -> NumericResult<String> {
        let truncated = self.truncate(exponent.saturating_neg())?;
        let text = truncated.to_string();
        if exponent < 0 {
            Ok(pad_fraction(&text, exponent.unsigned_abs()))
        } else {
            Ok(text)
        }
    }
}

/// Pad the fractional part of a canonical decimal string to `places` digits.
fn pad_fraction(canonical: &str, places: u32) -> String {
    let places = places as usize;
    let digits = canonical
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0);
    if digits >= places {
        return canonical.to_string();
    }
    let mut out = String::with_capacity(canonical.len() + places - digits + 1);
    out.push_str(canonical);
    if digits == 0 {
        out.push('.');
    }
    out.extend(std::iter::repeat('0').take(places - digits));
    out
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Value {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Value {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl Neg for Value {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_decimal(-self.magnitude)
    }
}

impl Neg for &Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Self::Output {
        Value::from_decimal(-self.magnitude)
    }
}

impl From<Decimal> for Value {
    fn from(magnitude: Decimal) -> Self {
        Self::from_decimal(magnitude)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::from_decimal(Decimal::from(value))
    }
}

impl From<Value> for Decimal {
    fn from(value: Value) -> Self {
        value.magnitude
    }
}

impl FromStr for Value {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "Value({}, raw={:?})", self.magnitude, raw),
            None => write!(f, "Value({})", self.magnitude),
        }
    }
}

/// Canonical rendering: the engine's decimal string, scale preserved.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
