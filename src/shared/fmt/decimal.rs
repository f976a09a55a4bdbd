//! Decimal formatting utilities for prices and percentage changes.

use rust_decimal::prelude::*;

/// Rounds to `decimals` places and renders with thousands separators.
///
/// Trailing zeros are kept so prices line up in a card grid.
pub fn money(value: &Decimal, decimals: u32) -> String {
    let rounded = value.round_dp(decimals);
    super::num::group_thousands(&format!("{:.1$}", rounded, decimals as usize))
}

/// Truncates toward zero at `decimals` places.
pub fn truncate(value: &Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToZero)
}

/// Signed percentage with two truncated decimals, e.g. `+2.34%` or `-0.51%`.
///
/// The `+` follows the untruncated value, so a gain of `0.001` reads `+0.00%`.
pub fn percent_change(value: &Decimal) -> String {
    let truncated = truncate(value, 2);
    if *value > Decimal::ZERO {
        format!("+{:.2}%", truncated)
    } else {
        format!("{:.2}%", truncated)
    }
}
