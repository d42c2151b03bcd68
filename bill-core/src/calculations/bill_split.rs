//! Bill splitting calculations.
//!
//! Every step takes the previous step's output as an `Option`. A bill that
//! cannot be parsed is not an error: it is the normal state while the user
//! is still typing, and it flows through as `None` so that no later step
//! ever treats a missing bill as $0.
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Bill amount parsed from text |
//! | 2    | Tip fraction: percentage / 100 |
//! | 3    | Tip amount: step 1 × step 2 |
//! | 4    | Total with tip: step 1 × (1 + step 2) |
//! | 5    | Amount per person: step 4 / people |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bill_core::calculations::calculate;
//! use bill_core::{CalculationInput, PeopleCount, TipPercentage};
//!
//! let input = CalculationInput::new("100.00", TipPercentage::Twenty, PeopleCount::new(2).unwrap());
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.total_with_tip, dec!(120.00));
//! assert_eq!(result.amount_per_person, dec!(60.00));
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{CalculationInput, CalculationResult, PeopleCount, TipPercentage};

/// Optional sign, then digits with at most one decimal point.
static BILL_AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?$")
        .expect("bill amount pattern is valid")
});

/// Parses the bill text into a decimal amount.
///
/// Accepts plain decimal notation only: `100`, `100.5`, `.5`, `5.`, `-3`.
/// Whitespace, currency symbols, thousands separators, underscores and
/// exponents all make the amount unavailable, as does a value too large
/// for a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bill_core::calculations::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount("100.00"), Some(dec!(100.00)));
/// assert_eq!(parse_bill_amount("$100"), None);
/// assert_eq!(parse_bill_amount("1,000"), None);
/// ```
pub fn parse_bill_amount(text: &str) -> Option<Decimal> {
    let Some(caps) = BILL_AMOUNT_PATTERN.captures(text) else {
        debug!(input = %text, "bill amount is not a decimal number");
        return None;
    };

    let sign = if &caps["sign"] == "-" { "-" } else { "" };
    let int = &caps["int"];
    let frac = caps.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        debug!(input = %text, "bill amount has no digits");
        return None;
    }

    let int = if int.is_empty() { "0" } else { int };
    let normalized = if frac.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{frac}")
    };

    match Decimal::from_str(&normalized) {
        Ok(amount) => Some(amount),
        Err(e) => {
            debug!(input = %text, "bill amount does not fit a decimal: {}", e);
            None
        }
    }
}

/// Converts a tip percentage to a fraction, e.g. 25 becomes 0.25.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bill_core::TipPercentage;
/// use bill_core::calculations::compute_tip_fraction;
///
/// assert_eq!(compute_tip_fraction(TipPercentage::TwentyFive), dec!(0.25));
/// assert_eq!(compute_tip_fraction(TipPercentage::None), dec!(0));
/// ```
pub fn compute_tip_fraction(percentage: TipPercentage) -> Decimal {
    Decimal::from(percentage.as_u8()) / Decimal::ONE_HUNDRED
}

/// Tip in currency units: bill × fraction.
pub fn compute_tip_amount(
    bill_amount: Option<Decimal>,
    tip_fraction: Decimal,
) -> Option<Decimal> {
    let amount = bill_amount?;
    let tip = amount.checked_mul(tip_fraction);
    if tip.is_none() {
        warn!(bill_amount = %amount, tip_fraction = %tip_fraction, "tip amount overflowed");
    }
    tip
}

/// Bill plus tip: bill × (1 + fraction).
///
/// An absent bill yields an absent total.
pub fn compute_total_with_tip(
    bill_amount: Option<Decimal>,
    tip_fraction: Decimal,
) -> Option<Decimal> {
    let amount = bill_amount?;
    let total = (Decimal::ONE + tip_fraction).checked_mul(amount);
    if total.is_none() {
        warn!(bill_amount = %amount, tip_fraction = %tip_fraction, "total with tip overflowed");
    }
    total
}

/// Each person's share of the total.
///
/// [`PeopleCount`] is never below 2, so the divisor is never zero.
pub fn compute_amount_per_person(
    total: Option<Decimal>,
    people_count: PeopleCount,
) -> Option<Decimal> {
    let total = total?;
    total.checked_div(Decimal::from(people_count.get()))
}

/// Runs every step for the given input.
///
/// Returns `None` exactly when the bill text cannot be parsed (or, for
/// absurdly large amounts, when the arithmetic overflows).
pub fn calculate(input: &CalculationInput) -> Option<CalculationResult> {
    let bill_amount = parse_bill_amount(&input.bill_amount_text);
    let tip_fraction = compute_tip_fraction(input.tip_percentage);
    let tip_amount = compute_tip_amount(bill_amount, tip_fraction);
    let total_with_tip = compute_total_with_tip(bill_amount, tip_fraction);
    let amount_per_person = compute_amount_per_person(total_with_tip, input.people_count);

    Some(CalculationResult {
        bill_amount: bill_amount?,
        tip_amount: tip_amount?,
        total_with_tip: total_with_tip?,
        amount_per_person: amount_per_person?,
    })
}
