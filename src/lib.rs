// ============================================================================
// Money Value Library
// Exact decimal amounts with rounding, codec adapters and grouped formatting
// ============================================================================

//! # Money Value
//!
//! An exact decimal `Value` for monetary amounts.
//!
//! ## Features
//!
//! - **Exact arithmetic** over `rust_decimal`, with overflow and division by
//!   zero reported as errors instead of silently rounding
//! - **Rounding modes**: half-away, banker's, ceiling, floor, toward/away from
//!   zero, and cash denominations (0.05, 0.10, 0.25, 0.50, 1.00)
//! - **Codec adapters** for text, fixed 16-byte binary, JSON, XML, SQL driver
//!   values, BSON and YAML
//! - **Grouped formatting** (`1,234,567.89`) over the exact digits
//!
//! ## Example
//!
//! ```rust
//! use money_value::prelude::*;
//!
//! let price: Value = "19.99".parse().unwrap();
//! let qty = Value::from_i64(3);
//!
//! let total = price.mul(&qty).unwrap();
//! assert_eq!(total.to_string(), "59.97");
//! assert_eq!(total.add(&Value::from_i64(1000)).unwrap().format_string(), "1,059.97");
//!
//! let tax = total.mul(&"0.0825".parse().unwrap()).unwrap();
//! assert_eq!(tax.round(2).unwrap().to_string(), "4.95");
//! assert_eq!(tax.round(-1).unwrap().to_string(), "0");
//! assert_eq!(tax.round_cash(CashInterval::Five).unwrap().to_string(), "4.95");
//!
//! assert_eq!(
//!     Value::from_i64(5).div(&Value::ZERO),
//!     Err(NumericError::DivisionByZero)
//! );
//! ```

pub mod codec;
pub mod format;
pub mod interfaces;
pub mod numeric;

pub use numeric::{CashInterval, NumericError, NumericResult, RoundingMode, Value};

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::sql::SqlValue;
    pub use crate::codec::Format;
    pub use crate::format::{format_grouped, format_with, FormatOptions};
    pub use crate::interfaces::{
        ConversionEvent, ConversionObserver, LoggingObserver, NoOpObserver,
    };
    pub use crate::numeric::{CashInterval, NumericError, NumericResult, RoundingMode, Value};
}
