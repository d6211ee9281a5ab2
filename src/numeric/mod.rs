// ============================================================================
// Numeric Module
// Exact decimal values for monetary calculations
// ============================================================================
//
// This module provides:
// - Value: immutable decimal with optional raw text provenance
// - RoundingMode / CashInterval: the rounding contract on the engine
// - NumericError: Error types for parsing, arithmetic and decoding
//
// Design principles:
// - No floating-point on the arithmetic path
// - All fallible arithmetic returns Result (no panics)
// - Parsing is exact or fails; it never rounds input digits away

pub mod engine;
mod errors;
mod value;

pub use engine::{CashInterval, RoundingMode};
pub use errors::{NumericError, NumericResult};
pub use value::Value;
