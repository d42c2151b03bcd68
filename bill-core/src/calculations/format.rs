//! Display formatting for calculator output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::to_cents_string;
use crate::models::CalculationResult;

/// Which value is missing, selecting the placeholder shown in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    Total,
    PerPerson,
}

impl Unavailable {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Total => "Cannot be calculated...",
            Self::PerPerson => "Cannot be determined...",
        }
    }
}

/// Formats an amount with two decimals, or the placeholder for `slot`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bill_core::calculations::{Unavailable, format_currency};
///
/// assert_eq!(format_currency(Some(dec!(60)), Unavailable::PerPerson), "60.00");
/// assert_eq!(format_currency(None, Unavailable::Total), "Cannot be calculated...");
/// ```
pub fn format_currency(
    value: Option<Decimal>,
    slot: Unavailable,
) -> String {
    match value {
        Some(amount) => to_cents_string(amount),
        None => slot.placeholder().to_string(),
    }
}

/// The live calculator readout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub total_with_tip: String,
    pub amount_per_person: String,
    /// Saving needs a per-person amount.
    pub can_save: bool,
}

impl FormattedResult {
    pub fn from_result(result: Option<&CalculationResult>) -> Self {
        Self {
            total_with_tip: format_currency(result.map(|r| r.total_with_tip), Unavailable::Total),
            amount_per_person: format_currency(
                result.map(|r| r.amount_per_person),
                Unavailable::PerPerson,
            ),
            can_save: result.is_some(),
        }
    }
}
