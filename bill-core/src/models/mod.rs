mod calculation;
mod history_entry;
mod people_count;
mod tip_percentage;

pub use calculation::{CalculationInput, CalculationResult};
pub use history_entry::HistoryEntry;
pub use people_count::PeopleCount;
pub use tip_percentage::TipPercentage;
