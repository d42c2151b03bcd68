use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use bill_ui::config::{FileConfig, Overrides, Settings};
use bill_ui::{AppState, Session, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Split a bill, tip included, between 2 to 20 people.
///
/// Starts an interactive calculator on the terminal. Saved calculations are
/// kept for the length of the session only.
#[derive(Debug, Parser)]
#[command(name = "share-the-bill", version, about)]
struct Cli {
    /// TOML file with default tip, people count and logging settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting tip percentage (0, 10, 15, 20 or 25).
    #[arg(short, long)]
    tip: Option<u8>,

    /// Starting number of people (2 to 20).
    #[arg(short, long)]
    people: Option<u32>,

    /// Starting bill amount.
    #[arg(short, long)]
    bill: Option<String>,

    /// Log filter, e.g. `debug` or `bill_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            tip: self.tip,
            people: self.people,
            bill: self.bill.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, cli.overrides()).context("invalid settings")?;

    logging::init_logging(settings.log_level.as_deref())?;
    if let Some(path) = &settings.log_file {
        logging::enable_file_logging(path)?;
        debug!(path = %path.display(), "file logging enabled");
    }
    info!(
        tip = settings.input.tip_percentage.as_u8(),
        people = settings.input.people_count.get(),
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(AppState::new(settings.input), stdin.lock(), stdout.lock());
    session.run()
}
