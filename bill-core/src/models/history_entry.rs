use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculationInput, CalculationResult};
use crate::calculations::common::to_cents_string;

/// A saved calculation, captured as display text.
///
/// Entries are snapshots: nothing about them changes after creation, and
/// later edits to the calculator input never reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: Uuid,
    bill_amount: String,
    tip_percentage: String,
    total_with_tip: String,
    people_count: String,
    amount_per_person: String,
}

impl HistoryEntry {
    /// Captures the current input and its result.
    pub fn snapshot(
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_amount: to_cents_string(result.bill_amount),
            tip_percentage: input.tip_percentage.as_u8().to_string(),
            total_with_tip: to_cents_string(result.total_with_tip),
            people_count: input.people_count.to_string(),
            amount_per_person: to_cents_string(result.amount_per_person),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn tip_percentage(&self) -> &str {
        &self.tip_percentage
    }

    pub fn total_with_tip(&self) -> &str {
        &self.total_with_tip
    }

    pub fn people_count(&self) -> &str {
        &self.people_count
    }

    pub fn amount_per_person(&self) -> &str {
        &self.amount_per_person
    }
}

/// Receipt-style layout: amount, tip, total, people, per person.
impl fmt::Display for HistoryEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Amount      {:>14}", format!("$ {}", self.bill_amount))?;
        writeln!(f, "Tip         {:>14}", format!("x {}%", self.tip_percentage))?;
        writeln!(f, "            {:>14}", "-----------")?;
        writeln!(f, "Total       {:>14}", format!("$ {}", self.total_with_tip))?;
        writeln!(f, "People      {:>14}", format!("/ {}", self.people_count))?;
        writeln!(f, "            {:>14}", "-----------")?;
        writeln!(f, "Per person  {:>14}", format!("$ {}", self.amount_per_person))?;
        write!(f, "            {:>14}", "===========")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{PeopleCount, TipPercentage};

    fn sample() -> (CalculationInput, CalculationResult) {
        let input = CalculationInput::new(
            "100",
            TipPercentage::Twenty,
            PeopleCount::new(2).unwrap(),
        );
        let result = CalculationResult {
            bill_amount: dec!(100),
            tip_amount: dec!(20.00),
            total_with_tip: dec!(120.00),
            amount_per_person: dec!(60.00),
        };
        (input, result)
    }

    #[test]
    fn snapshot_formats_every_field() {
        let (input, result) = sample();

        let entry = HistoryEntry::snapshot(&input, &result);

        assert_eq!(entry.bill_amount(), "100.00");
        assert_eq!(entry.tip_percentage(), "20");
        assert_eq!(entry.total_with_tip(), "120.00");
        assert_eq!(entry.people_count(), "2");
        assert_eq!(entry.amount_per_person(), "60.00");
    }

    #[test]
    fn snapshot_ignores_later_input_changes() {
        let (mut input, result) = sample();
        let entry = HistoryEntry::snapshot(&input, &result);

        input.bill_amount_text = "999".to_string();
        input.tip_percentage = TipPercentage::None;

        assert_eq!(entry.bill_amount(), "100.00");
        assert_eq!(entry.tip_percentage(), "20");
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let (input, result) = sample();

        let first = HistoryEntry::snapshot(&input, &result);
        let second = HistoryEntry::snapshot(&input, &result);

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn display_renders_receipt_lines() {
        let (input, result) = sample();
        let entry = HistoryEntry::snapshot(&input, &result);

        let rendered = entry.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Amount"));
        assert!(lines[0].ends_with("$ 100.00"));
        assert!(lines[1].ends_with("x 20%"));
        assert!(lines[3].ends_with("$ 120.00"));
        assert!(lines[4].ends_with("/ 2"));
        assert!(lines[6].ends_with("$ 60.00"));
    }
}
