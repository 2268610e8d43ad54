//! Currency formatting for console output.
//!
//! Salaries are shown with a dollar sign, thousands separators and exactly
//! two decimal places, rounded half away from zero:
//!
//! - `1234.5` → `$1,234.50`
//! - `1000000` → `$1,000,000.00`
//! - `0.005` → `$0.01`

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits used for every currency amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to [`MONEY_SCALE`] places, half away from zero.
pub fn round_money(value: &Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_money(value: &Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_SCALE);
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}
