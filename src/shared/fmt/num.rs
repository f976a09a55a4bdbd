//! Number formatting utilities for human-readable display.
//!
//! Fixed-decimal f64 labels for the chart and thousands separators for card text.
//! For `Decimal` formatting, use the `decimal` sibling module.

use rust_decimal::prelude::*;

/// Inserts thousands separators into the integer part of a formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats `value` with exactly `decimals` fraction digits.
///
/// Ties round away from zero on the exact binary value, so `0.125` becomes
/// `"0.13"` and `1.005` (stored as 1.00499…) becomes `"1.00"`. Non-finite
/// values render as `NaN`, `Infinity` or `-Infinity`.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1$}", rounded, decimals as usize)
        }
        // Beyond Decimal's range; plain float formatting is exact enough there.
        None => format!("{:.1$}", value, decimals as usize),
    }
}
