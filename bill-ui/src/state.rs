//! Application state shared by the calculate and history screens.
//!
//! The state owns the live calculator input and the only [`HistoryStore`].
//! Both screens go through these methods; neither holds its own copy.

use std::collections::BTreeSet;

use bill_core::calculations::{FormattedResult, calculate};
use bill_core::{
    CalculationError, CalculationInput, CalculationResult, HistoryEntry, HistoryError,
    HistoryStore, PeopleCount, TipPercentage,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("nothing to save until the bill amount can be calculated")]
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    input: CalculationInput,
    history: HistoryStore,
}

impl AppState {
    /// Create state with the given starting input and an empty history.
    pub fn new(input: CalculationInput) -> Self {
        Self {
            input,
            history: HistoryStore::new(),
        }
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn set_bill_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.input.bill_amount_text = text.into();
        debug!(bill = %self.input.bill_amount_text, "bill text changed");
    }

    pub fn set_tip(
        &mut self,
        tip: TipPercentage,
    ) {
        self.input.tip_percentage = tip;
        debug!(tip = tip.as_u8(), "tip percentage changed");
    }

    pub fn set_people(
        &mut self,
        count: PeopleCount,
    ) {
        self.input.people_count = count;
        debug!(people = count.get(), "people count changed");
    }

    /// Stepper up; stays at the maximum.
    pub fn more_people(&mut self) {
        self.set_people(self.input.people_count.increment());
    }

    /// Stepper down; stays at the minimum.
    pub fn fewer_people(&mut self) {
        self.set_people(self.input.people_count.decrement());
    }

    /// Set people count from a raw number.
    pub fn set_people_count(
        &mut self,
        count: u32,
    ) -> Result<(), CalculationError> {
        self.set_people(PeopleCount::new(count)?);
        Ok(())
    }

    /// Recomputed from the current input on every call.
    pub fn result(&self) -> Option<CalculationResult> {
        calculate(&self.input)
    }

    pub fn formatted(&self) -> FormattedResult {
        FormattedResult::from_result(self.result().as_ref())
    }

    pub fn can_save(&self) -> bool {
        self.result().is_some()
    }

    /// Snapshot the current calculation into history.
    pub fn save(&mut self) -> Result<HistoryEntry, SaveError> {
        let result = self.result().ok_or(SaveError::Unavailable)?;
        let entry = HistoryEntry::snapshot(&self.input, &result);
        info!(
            id = %entry.id(),
            total = entry.total_with_tip(),
            per_person = entry.amount_per_person(),
            "calculation saved"
        );
        self.history.append(entry.clone());
        Ok(entry)
    }

    /// Delete entries by their positions in the newest-first view.
    pub fn delete(
        &mut self,
        positions: &BTreeSet<usize>,
    ) -> Result<(), HistoryError> {
        self.history.remove_at(positions)?;
        info!(count = positions.len(), remaining = self.history.len(), "history entries deleted");
        Ok(())
    }
}
