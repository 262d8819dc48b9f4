//! Text formatting for the presentation layer.
//!
//! Pure string helpers; nothing here draws. Screens call these so that the
//! fixed-width regions on the display get predictable text.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::units::lovelace_to_ada;

/// ADA amount with up to 6 decimals and trailing zeros trimmed.
///
/// `1_500_000` → `"1.5"`, `2_000_000` → `"2"`.
pub fn format_ada(lovelace: u64) -> String {
    lovelace_to_ada(lovelace).normalize().to_string()
}

/// Decimal rounded to `dp` places, always printing exactly `dp` decimals.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Signed 24h change, two decimals: `"+2.45%"`, `"-7.89%"`, `"+0.00%"`.
pub fn format_change_percent(change: Decimal) -> String {
    let sign = if change < Decimal::ZERO { "-" } else { "+" };
    format!("{}{}%", sign, format_fixed(change.abs(), 2))
}

/// Floor price cell: `"25.00 ADA"`, or `"N/A"` while unknown (zero).
pub fn format_floor_price(floor_ada: Decimal) -> String {
    if floor_ada > Decimal::ZERO {
        format!("{} ADA", format_fixed(floor_ada, 2))
    } else {
        "N/A".to_string()
    }
}

/// Keep the first and last `keep` characters: `stake1u8l0y8...c0c5gt5k3`.
pub fn truncate_middle(s: &str, keep: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= keep * 2 {
        return s.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Cut strings longer than `max` characters to `max - 3` plus `"..."`.
pub fn truncate_end(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head)
}

/// Uptime as `"{d}d {h}h {m}m {s}s"`.
pub fn format_uptime(uptime_ms: u64) -> String {
    let secs = uptime_ms / 1000;
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}
