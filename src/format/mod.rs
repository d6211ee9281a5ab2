// ============================================================================
// Formatter Module
// Grouped-digit rendering over the exact decimal digits
// ============================================================================

mod options;

pub use options::FormatOptions;

use crate::numeric::{RoundingMode, Value};

/// Round half away from zero to `precision` digits and render with optional
/// `,` thousands grouping and exactly `precision` fractional digits.
///
/// ```rust
/// use money_value::{format::format_grouped, Value};
///
/// let value: Value = "1234567.891".parse().unwrap();
/// assert_eq!(format_grouped(&value, 2, true), "1,234,567.89");
/// assert_eq!(format_grouped(&value, 0, false), "1234568");
/// ```
pub fn format_grouped(value: &Value, precision: u32, use_grouping: bool) -> String {
    format_with(value, &FormatOptions::new(precision, use_grouping))
}

/// Render with explicit options. Options are not validated here.
pub fn format_with(value: &Value, options: &FormatOptions) -> String {
    let rounded = value.round_dp(options.precision, RoundingMode::HalfAwayFromZero);
    let digits = rounded.abs().to_string();
    let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    // A value rounding to zero never shows a sign
    if rounded.is_negative() {
        out.push('-');
    }

    if options.use_grouping {
        push_grouped(&mut out, int_digits, options.group_separator);
    } else {
        out.push_str(int_digits);
    }

    if options.precision > 0 {
        out.push(options.decimal_separator);
        out.push_str(frac_digits);
        for _ in frac_digits.len()..options.precision as usize {
            out.push('0');
        }
    }

    out
}

/// Leading group of 1-3 digits, then groups of exactly 3.
fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

// ============================================================================
// Value Convenience Methods
// ============================================================================

impl Value {
    /// Display amount: two digits with grouping (`1,234.50`).
    pub fn format_string(&self) -> String {
        format_with(self, &FormatOptions::display())
    }

    /// Two digits, no grouping (`1234.50`).
    pub fn format_number(&self) -> String {
        format_with(self, &FormatOptions::plain())
    }

    pub fn format_number_with_precision(&self, precision: u32) -> String {
        format_with(self, &FormatOptions::plain().with_precision(precision))
    }

    /// Whole units, no grouping (`1235`).
    pub fn format_number_without_decimal(&self) -> String {
        format_with(self, &FormatOptions::whole())
    }
}
