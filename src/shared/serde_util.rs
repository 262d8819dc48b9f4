//! Custom serde helpers for indexer wire formats.
//!
//! The portfolio and collection endpoints are loose about number encoding: the
//! same field may arrive as a JSON number, a numeric string, or `null`. These
//! helpers turn any of those into `Option<Decimal>` instead of failing the
//! whole document.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

fn decimal_from_text(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Interpret a JSON value as a decimal, if it is numeric.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => decimal_from_text(&n.to_string()),
        Value::String(s) => decimal_from_text(s),
        _ => None,
    }
}

/// `Option<Decimal>` from a number, numeric string, or null/absent field.
///
/// Use with `#[serde(default, deserialize_with = "lenient_decimal::deserialize")]`.
pub mod lenient_decimal {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(decimal_from_value))
    }
}

/// `Option<u64>` from a non-negative integer, numeric string, or null/absent field.
pub mod lenient_u64 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
    }
}
