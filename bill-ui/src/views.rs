//! Text rendering of the two screens.

use std::fmt;

use bill_core::{HistoryStore, TipPercentage};

use crate::state::AppState;

pub const HELP: &str = "\
Commands:
  bill <amount>        set the bill amount (plain decimal, e.g. 84.50)
  tip <percent>        choose a tip: 10, 15, 20, 25 or 0
  people <count>       split between 2 and 20 people
  more | fewer         add or remove one person
  save                 keep the current calculation in history
  history              list saved calculations, newest first
  delete <n> [n...]    remove history entries by their listed number
  show                 redisplay the calculator
  log <filter>         change the log level (e.g. debug)
  help                 show this help
  quit                 leave";

/// The calculate screen for the current input.
pub struct CalculationScreen<'a>(pub &'a AppState);

impl fmt::Display for CalculationScreen<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let input = self.0.input();
        let formatted = self.0.formatted();

        let bill = if input.bill_amount_text.is_empty() {
            "(enter an amount)"
        } else {
            input.bill_amount_text.as_str()
        };

        writeln!(f, "== Share the Bill ==")?;
        writeln!(f, "Bill amount        $ {bill}")?;
        write!(f, "Tip percentage    ")?;
        for tip in TipPercentage::all() {
            if *tip == input.tip_percentage {
                write!(f, " [{}]", tip.label())?;
            } else {
                write!(f, "  {} ", tip.label())?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total with tip     $ {}", formatted.total_with_tip)?;
        writeln!(f, "How many people?   {}", input.people_count)?;
        writeln!(f, "Each person pays   $ {}", formatted.amount_per_person)?;
        write!(
            f,
            "Save               {}",
            if formatted.can_save { "available" } else { "disabled" }
        )
    }
}

/// The history screen, numbered from 1 in newest-first order.
pub struct HistoryScreen<'a>(pub &'a HistoryStore);

impl fmt::Display for HistoryScreen<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "== History ==")?;
        if self.0.is_empty() {
            return write!(f, "\n(no saved calculations)");
        }
        for (position, entry) in self.0.view_newest_first().into_iter().enumerate() {
            write!(f, "\n#{}\n{}", position + 1, entry)?;
        }
        Ok(())
    }
}
