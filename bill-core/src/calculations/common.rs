//! Rounding shared by the calculator and the formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bill_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(33.334)), dec!(33.33));
/// assert_eq!(round_half_up(dec!(33.335)), dec!(33.34));
/// assert_eq!(round_half_up(dec!(-33.335)), dec!(-33.34)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to cents and renders exactly two fraction digits.
///
/// A value that rounds to zero always renders as `0.00`, never `-0.00`.
/// Amounts too large to carry two more digits in a [`Decimal`] are padded
/// with zeros instead.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bill_core::calculations::common::to_cents_string;
///
/// assert_eq!(to_cents_string(dec!(60)), "60.00");
/// assert_eq!(to_cents_string(dec!(33.3333333)), "33.33");
/// ```
pub fn to_cents_string(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    let text = rounded.to_string();
    match rounded.scale() {
        0 => format!("{text}.00"),
        1 => format!("{text}0"),
        _ => text,
    }
}
