use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PeopleCount, TipPercentage};

/// Live calculator input, as typed and selected by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Raw bill text; may be empty or mid-edit.
    pub bill_amount_text: String,
    pub tip_percentage: TipPercentage,
    pub people_count: PeopleCount,
}

impl CalculationInput {
    pub fn new(
        bill_amount_text: impl Into<String>,
        tip_percentage: TipPercentage,
        people_count: PeopleCount,
    ) -> Self {
        Self {
            bill_amount_text: bill_amount_text.into(),
            tip_percentage,
            people_count,
        }
    }
}

/// Values derived from a parseable bill amount.
///
/// Either every field is known or there is no result at all, so callers
/// hold an `Option<CalculationResult>` rather than four optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bill_amount: Decimal,
    pub tip_amount: Decimal,
    pub total_with_tip: Decimal,
    pub amount_per_person: Decimal,
}
