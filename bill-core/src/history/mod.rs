mod store;

pub use store::{HistoryError, HistoryStore};
