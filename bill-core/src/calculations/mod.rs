//! Calculator for splitting a bill with a tip.
//!
//! Everything here is a pure function of its arguments; the only side
//! effect is tracing output.

pub mod bill_split;
pub mod common;
pub mod format;

use thiserror::Error;

pub use bill_split::{
    calculate, compute_amount_per_person, compute_tip_amount, compute_tip_fraction,
    compute_total_with_tip, parse_bill_amount,
};
pub use format::{FormattedResult, Unavailable, format_currency};

/// Inputs the calculator refuses to model.
///
/// The UI constrains these before they reach the calculator, so seeing one
/// means a caller broke the contract, not that the user typed something odd.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// People count must stay within the stepper's range.
    #[error("people count must be between {min} and {max}, got {count}")]
    PeopleCountOutOfRange { count: u32, min: u32, max: u32 },

    /// Tip percentage must be one of the offered choices.
    #[error("unsupported tip percentage {0}%")]
    UnsupportedTipPercentage(u8),
}
