pub mod commands;
pub mod config;
pub mod logging;
pub mod session;
pub mod state;
pub mod views;

pub use session::{Flow, Session};
pub use state::AppState;
