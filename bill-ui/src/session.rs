//! The interactive loop tying commands, state and screens together.
//!
//! Each line is handled completely (state change, recalculation, output)
//! before the next one is read.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bill_core::HistoryError;
use tracing::{debug, info, warn};

use crate::commands::Command;
use crate::logging;
use crate::state::AppState;
use crate::views::{CalculationScreen, HELP, HistoryScreen};

/// "1 entry", "3 entries".
fn entry_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{count} entries")
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    state: AppState,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        state: AppState,
        reader: R,
        writer: W,
    ) -> Self {
        Self {
            state,
            reader,
            writer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Gives back the state and the output sink once the session is over.
    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.writer)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", CalculationScreen(&self.state))?;
        writeln!(self.writer, "Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                debug!("input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!(saved = self.state.history().len(), "session ended");
        Ok(())
    }

    /// Applies one input line and writes the resulting screen or message.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(line = line.trim(), "rejected command: {}", e);
                writeln!(self.writer, "error: {e} (type 'help' for commands)")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "handling command");

        match command {
            Command::Bill(text) => {
                self.state.set_bill_text(text);
                self.show_calculation()?;
            }
            Command::Tip(tip) => {
                self.state.set_tip(tip);
                self.show_calculation()?;
            }
            Command::People(count) => {
                self.state.set_people(count);
                self.show_calculation()?;
            }
            Command::More => {
                self.state.more_people();
                self.show_calculation()?;
            }
            Command::Fewer => {
                self.state.fewer_people();
                self.show_calculation()?;
            }
            Command::Save => match self.state.save() {
                Ok(entry) => {
                    writeln!(
                        self.writer,
                        "Saved: $ {} each ({} in history).",
                        entry.amount_per_person(),
                        entry_count(self.state.history().len())
                    )?;
                }
                Err(e) => writeln!(self.writer, "Save is disabled: {e}.")?,
            },
            Command::History => {
                writeln!(self.writer, "{}", HistoryScreen(self.state.history()))?;
            }
            Command::Delete(positions) => match self.state.delete(&positions) {
                Ok(()) => {
                    writeln!(self.writer, "Deleted {}.", entry_count(positions.len()))?;
                    writeln!(self.writer, "{}", HistoryScreen(self.state.history()))?;
                }
                Err(HistoryError::PositionOutOfRange { position, len }) => {
                    warn!(position, len, "delete rejected");
                    writeln!(
                        self.writer,
                        "error: there is no history entry #{} ({len} saved)",
                        position + 1
                    )?;
                }
            },
            Command::Show => self.show_calculation()?,
            Command::Log(filter) => match logging::set_log_level(&filter) {
                Ok(()) => writeln!(self.writer, "Log filter set to '{filter}'.")?,
                Err(e) => writeln!(self.writer, "error: {e}")?,
            },
            Command::Help => writeln!(self.writer, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_calculation(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", CalculationScreen(&self.state))?;
        Ok(())
    }
}
