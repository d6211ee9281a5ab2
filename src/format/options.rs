// ============================================================================
// Format Options
// Precision, grouping and separator configuration for grouped output
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How `format_with` renders a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Fractional digits, after half-away-from-zero rounding
    pub precision: u32,

    /// Insert `group_separator` every three integer digits
    pub use_grouping: bool,

    pub group_separator: char,

    pub decimal_separator: char,
}

impl FormatOptions {
    /// Options with `,` grouping and `.` decimal separators.
    pub const fn new(precision: u32, use_grouping: bool) -> Self {
        Self {
            precision,
            use_grouping,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Builder method: Set fractional digits
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Enable or disable digit grouping
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Builder method: Set the thousands separator
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Builder method: Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, separator) in [
            ("Group", self.group_separator),
            ("Decimal", self.decimal_separator),
        ] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(format!(
                    "{} separator cannot be a digit or '-': {:?}",
                    name, separator
                ));
            }
        }

        if self.group_separator == self.decimal_separator {
            return Err("Group and decimal separators must differ".to_string());
        }

        Ok(())
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::display()
    }
}

// ============================================================================
// Presets
// ============================================================================

impl FormatOptions {
    /// Display amounts: `1,234,567.89`
    pub const fn display() -> Self {
        Self::new(2, true)
    }

    /// Plain two-digit numbers: `1234567.89`
    pub const fn plain() -> Self {
        Self::new(2, false)
    }

    /// Whole units: `1234568`
    pub const fn whole() -> Self {
        Self::new(0, false)
    }
}
