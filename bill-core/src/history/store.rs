use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::HistoryEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history position {position} is out of range ({len} entries)")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Saved calculations in insertion order.
///
/// Entries are only ever appended or removed. Positions handed to
/// [`HistoryStore::get`] and [`HistoryStore::remove_at`] refer to the
/// newest-first view, which is what the history screen shows.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry after every existing one.
    pub fn append(
        &mut self,
        entry: HistoryEntry,
    ) {
        debug!(id = %entry.id(), len = self.entries.len() + 1, "history entry appended");
        self.entries.push(entry);
    }

    /// Entries from most recently appended to oldest.
    pub fn view_newest_first(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().collect()
    }

    /// Entry at a newest-first position.
    pub fn get(
        &self,
        position: usize,
    ) -> Option<&HistoryEntry> {
        let index = self.insertion_index(position)?;
        self.entries.get(index)
    }

    /// Removes the entries at the given newest-first positions.
    ///
    /// The request is all-or-nothing: if any position is out of range the
    /// store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PositionOutOfRange`] for the first position
    /// that does not exist in the current view.
    pub fn remove_at(
        &mut self,
        positions: &BTreeSet<usize>,
    ) -> Result<(), HistoryError> {
        let len = self.entries.len();
        if let Some(&position) = positions.iter().find(|&&p| p >= len) {
            warn!(position, len, "rejected history removal");
            return Err(HistoryError::PositionOutOfRange { position, len });
        }

        // Ascending newest-first positions map to descending insertion
        // indexes, so each removal leaves the remaining indexes valid.
        for &position in positions {
            let index = len - 1 - position;
            let removed = self.entries.remove(index);
            debug!(id = %removed.id(), position, "history entry removed");
        }
        Ok(())
    }

    fn insertion_index(
        &self,
        position: usize,
    ) -> Option<usize> {
        self.entries.len().checked_sub(position + 1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{CalculationInput, CalculationResult, PeopleCount, TipPercentage};

    /// Builds an entry whose bill amount identifies it in assertions.
    fn entry(bill: u32) -> HistoryEntry {
        let input = CalculationInput::new(
            bill.to_string(),
            TipPercentage::None,
            PeopleCount::default(),
        );
        let amount = rust_decimal::Decimal::from(bill);
        let result = CalculationResult {
            bill_amount: amount,
            tip_amount: dec!(0),
            total_with_tip: amount,
            amount_per_person: amount / dec!(2),
        };
        HistoryEntry::snapshot(&input, &result)
    }

    fn bills(store: &HistoryStore) -> Vec<&str> {
        store
            .view_newest_first()
            .into_iter()
            .map(HistoryEntry::bill_amount)
            .collect()
    }

    fn positions(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    /// Store holding A=1, B=2, C=3 in insertion order.
    fn abc() -> HistoryStore {
        let mut store = HistoryStore::new();
        store.append(entry(1));
        store.append(entry(2));
        store.append(entry(3));
        store
    }

    // =========================================================================
    // append / view tests
    // =========================================================================

    #[test]
    fn new_store_is_empty() {
        let store = HistoryStore::new();

        assert!(store.is_empty());
        assert!(store.view_newest_first().is_empty());
    }

    #[test]
    fn appended_entry_is_first_in_view() {
        let mut store = abc();
        let latest = entry(4);
        let id = latest.id();

        store.append(latest);

        assert_eq!(store.view_newest_first()[0].id(), id);
    }

    #[test]
    fn view_reverses_insertion_order() {
        let store = abc();

        assert_eq!(bills(&store), vec!["3.00", "2.00", "1.00"]);
    }

    #[test]
    fn view_is_restartable() {
        let store = abc();

        assert_eq!(store.view_newest_first(), store.view_newest_first());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn get_uses_newest_first_positions() {
        let store = abc();

        assert_eq!(store.get(0).unwrap().bill_amount(), "3.00");
        assert_eq!(store.get(2).unwrap().bill_amount(), "1.00");
        assert!(store.get(3).is_none());
    }

    // =========================================================================
    // remove_at tests
    // =========================================================================

    #[test]
    fn remove_first_shown_removes_newest() {
        let mut store = abc();

        store.remove_at(&positions(&[0])).unwrap();

        assert_eq!(bills(&store), vec!["2.00", "1.00"]);
    }

    #[test]
    fn remove_second_shown_removes_middle() {
        let mut store = abc();

        store.remove_at(&positions(&[1])).unwrap();

        assert_eq!(bills(&store), vec!["3.00", "1.00"]);
    }

    #[test]
    fn remove_last_shown_removes_oldest() {
        let mut store = abc();

        store.remove_at(&positions(&[2])).unwrap();

        assert_eq!(bills(&store), vec!["3.00", "2.00"]);
    }

    #[test]
    fn remove_several_positions_at_once() {
        let mut store = abc();
        store.append(entry(4));

        store.remove_at(&positions(&[0, 2])).unwrap();

        assert_eq!(bills(&store), vec!["3.00", "1.00"]);
    }

    #[test]
    fn remove_every_position_empties_store() {
        let mut store = abc();

        store.remove_at(&positions(&[0, 1, 2])).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn remove_nothing_is_a_no_op() {
        let mut store = abc();

        store.remove_at(&BTreeSet::new()).unwrap();

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let mut store = abc();

        let result = store.remove_at(&positions(&[3]));

        assert_eq!(
            result,
            Err(HistoryError::PositionOutOfRange {
                position: 3,
                len: 3
            })
        );
    }

    #[test]
    fn rejected_removal_leaves_store_unchanged() {
        let mut store = abc();

        let result = store.remove_at(&positions(&[0, 7]));

        assert!(result.is_err());
        assert_eq!(bills(&store), vec!["3.00", "2.00", "1.00"]);
    }

    #[test]
    fn remove_from_empty_store_is_rejected() {
        let mut store = HistoryStore::new();

        assert!(store.remove_at(&positions(&[0])).is_err());
    }
}
