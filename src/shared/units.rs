//! Base-unit (lovelace) to display-unit (ADA) conversion.
//!
//! All math uses `rust_decimal::Decimal`. Base amounts are integers and are
//! never routed through floating point.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Base units per display unit.
pub const LOVELACE_PER_ADA: u64 = 1_000_000;

const ADA_SCALE: u32 = 6;

/// Errors from parsing or scaling base-unit amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    Empty,
    NotAnInteger(String),
    Negative(String),
    Overflow(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::Empty => write!(f, "Empty amount"),
            UnitError::NotAnInteger(v) => write!(f, "Not an integer amount: '{}'", v),
            UnitError::Negative(v) => write!(f, "Negative amount: {}", v),
            UnitError::Overflow(v) => write!(f, "Amount does not fit in 64 bits: {}", v),
        }
    }
}

impl std::error::Error for UnitError {}

/// Exact lovelace → ADA conversion.
pub fn lovelace_to_ada(lovelace: u64) -> Decimal {
    Decimal::from_i128_with_scale(lovelace as i128, ADA_SCALE).normalize()
}

/// Convert a possibly fractional base-unit amount (e.g. a floor price that
/// came back as a JSON number) into ADA.
pub fn base_units_to_ada(base: Decimal) -> Decimal {
    (base / Decimal::from(LOVELACE_PER_ADA)).normalize()
}

/// ADA → lovelace. Fractions of a lovelace are rejected.
pub fn ada_to_lovelace(ada: Decimal) -> Result<u64, UnitError> {
    if ada.is_sign_negative() && !ada.is_zero() {
        return Err(UnitError::Negative(ada.to_string()));
    }
    let scaled = ada
        .checked_mul(Decimal::from(LOVELACE_PER_ADA))
        .ok_or_else(|| UnitError::Overflow(ada.to_string()))?;
    if scaled.fract() != Decimal::ZERO {
        return Err(UnitError::NotAnInteger(scaled.to_string()));
    }
    scaled
        .to_u64()
        .ok_or_else(|| UnitError::Overflow(scaled.to_string()))
}

/// Parse a textual base-unit amount as a 64-bit integer.
///
/// Indexers send arbitrary-precision balances as strings; parsing through
/// `f64` would silently drop precision above 2^53 lovelace.
pub fn parse_lovelace(raw: &str) -> Result<u64, UnitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UnitError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(UnitError::Negative(trimmed.to_string()));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UnitError::NotAnInteger(trimmed.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| UnitError::Overflow(trimmed.to_string()))
}
