//! Core of the bill splitter: the calculator and the history store.

pub mod calculations;
pub mod history;
pub mod models;

pub use calculations::CalculationError;
pub use history::{HistoryError, HistoryStore};
pub use models::*;
