//! Money rounding and formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents, half away from zero.
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(734825, 3)), Decimal::new(73483, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal digits.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}
